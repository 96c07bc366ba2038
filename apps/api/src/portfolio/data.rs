//! Portfolio content, compiled into the binary.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct FunFact {
    pub text: &'static str,
    /// Substring of `text` the client emphasises.
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedApp {
    pub title: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub description: &'static str,
    pub role: &'static str,
    pub challenges: &'static str,
    pub solution: &'static str,
    pub demo: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmallProject {
    pub title: &'static str,
    pub icon: &'static str,
    pub technologies: &'static [&'static str],
    pub description: &'static str,
    pub code: &'static str,
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        items: &["React", "Next.js", "JavaScript", "TypeScript", "HTML5", "CSS3", "Tailwind", "Styled Components", "Framer Motion"],
    },
    SkillCategory {
        name: "Backend",
        items: &["Node.js", "Express", "NestJS", "GraphQL", "REST APIs", "Authentication & Authorization"],
    },
    SkillCategory {
        name: "Databases",
        items: &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Prisma", "Drizzle ORM"],
    },
    SkillCategory {
        name: "Tools & DevOps",
        items: &["Git", "GitHub Actions", "Docker", "AWS", "Vercel", "CI/CD", "Jest", "Vitest"],
    },
    SkillCategory {
        name: "Mobile & Others",
        items: &["React Native", "Expo", "Progressive Web Apps", "Responsive Design", "Accessibility"],
    },
];

pub const FUN_FACTS: &[FunFact] = &[
    FunFact {
        text: "I've written code in 8 different programming languages",
        highlight: "8 different programming languages",
    },
    FunFact {
        text: "I've contributed to 5 open-source projects",
        highlight: "5 open-source projects",
    },
    FunFact {
        text: "I learned to code by building a clone of Instagram",
        highlight: "clone of Instagram",
    },
    FunFact {
        text: "I once debugged a production issue while on vacation at the beach",
        highlight: "on vacation at the beach",
    },
];

pub const FEATURED_APPS: &[FeaturedApp] = &[
    FeaturedApp {
        title: "E-commerce Platform",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
        technologies: &["React", "Node.js", "MongoDB", "Redux", "Stripe"],
        description: "Full-featured online store with payment processing, inventory management, and customer accounts",
        role: "Lead Developer",
        challenges: "Implementing a secure payment gateway and optimizing database queries for performance",
        solution: "Integrated Stripe API with custom hooks and implemented MongoDB indexing for faster queries",
        demo: "https://ecommerce-demo.example.com",
        code: "https://github.com/username/ecommerce-platform",
    },
    FeaturedApp {
        title: "Project Management Dashboard",
        image: "https://images.unsplash.com/photo-1600267165655-e7053baa6e49?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
        technologies: &["Vue.js", "Firebase", "Tailwind CSS", "Chart.js"],
        description: "Comprehensive project management solution with drag-and-drop kanban boards and real-time updates",
        role: "Full Stack Developer",
        challenges: "Building a responsive UI with real-time data synchronization across multiple clients",
        solution: "Implemented Firestore listeners and custom Vue.js components for efficient state management",
        demo: "https://pm-tool.example.com",
        code: "https://github.com/username/project-management",
    },
    FeaturedApp {
        title: "AI-Powered Content Platform",
        image: "https://images.unsplash.com/photo-1470790376778-a9fbc86d70e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=1904&q=80",
        technologies: &["Next.js", "GraphQL", "PostgreSQL", "OpenAI API"],
        description: "Content management system with AI-assisted content generation and advanced analytics",
        role: "Backend Developer",
        challenges: "Creating a scalable architecture for handling AI processing alongside user requests",
        solution: "Designed an asynchronous processing system with GraphQL subscriptions for real-time updates",
        demo: "https://ai-content.example.com",
        code: "https://github.com/username/ai-content-platform",
    },
];

pub const SMALL_PROJECTS: &[SmallProject] = &[
    SmallProject {
        title: "Weather Dashboard",
        icon: "bx-cloud",
        technologies: &["React", "OpenWeather API", "ChartJS"],
        description: "Interactive weather visualization with 7-day forecasts and historical data comparisons",
        code: "https://github.com/username/weather-dashboard",
    },
    SmallProject {
        title: "Code Snippet Library",
        icon: "bx-code-block",
        technologies: &["TypeScript", "React", "Firebase"],
        description: "Searchable personal collection of reusable code snippets with syntax highlighting and categories",
        code: "https://github.com/username/code-snippets",
    },
    SmallProject {
        title: "DevOps Automation Tools",
        icon: "bx-terminal",
        technologies: &["Python", "Docker", "GitHub Actions"],
        description: "Collection of scripts and workflows for automating CI/CD pipelines and infrastructure management",
        code: "https://github.com/username/devops-tools",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fun_fact_highlights_are_substrings() {
        for fact in FUN_FACTS {
            assert!(fact.text.contains(fact.highlight), "{}", fact.text);
        }
    }

    #[test]
    fn test_every_project_lists_technologies() {
        assert!(FEATURED_APPS.iter().all(|a| !a.technologies.is_empty()));
        assert!(SMALL_PROJECTS.iter().all(|p| !p.technologies.is_empty()));
    }

    #[test]
    fn test_skill_categories_are_unique() {
        let mut names: Vec<_> = SKILLS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILLS.len());
    }
}
