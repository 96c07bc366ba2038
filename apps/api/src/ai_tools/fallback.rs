//! Curated datasets served when no provider produces a usable answer.
//!
//! Selection is a plain case-insensitive keyword match on the request; no provider is involved.

use tracing::debug;

use crate::ai_tools::models::{LearningPath, ProjectRecommendation, SkillLevel, Timeline};

struct CuratedRecommendation {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    difficulty: SkillLevel,
    time_estimate: &'static str,
    skills: &'static [&'static str],
    learning_goals: &'static [&'static str],
}

struct CuratedTimeline {
    title: &'static str,
    keywords: &'static [&'static str],
    milestones: &'static [&'static str],
}

struct CuratedLevel {
    steps: &'static [&'static str],
    resources: &'static [&'static str],
}

struct CuratedPath {
    skill: &'static str,
    keywords: &'static [&'static str],
    beginner: CuratedLevel,
    intermediate: CuratedLevel,
    advanced: CuratedLevel,
}

impl CuratedPath {
    fn level(&self, level: SkillLevel) -> &CuratedLevel {
        match level {
            SkillLevel::Beginner => &self.beginner,
            SkillLevel::Intermediate => &self.intermediate,
            SkillLevel::Advanced => &self.advanced,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k))
}

/// The three curated recommendations. Returned regardless of the request.
pub fn curated_recommendations() -> Vec<ProjectRecommendation> {
    RECOMMENDATIONS
        .iter()
        .map(|r| ProjectRecommendation {
            title: r.title.to_string(),
            description: r.description.to_string(),
            technologies: owned(r.technologies),
            difficulty: r.difficulty.as_str().to_string(),
            time_estimate: r.time_estimate.to_string(),
            skills: owned(r.skills),
            learning_goals: owned(r.learning_goals),
        })
        .collect()
}

fn find_timeline(project_title: &str) -> Option<&'static CuratedTimeline> {
    TIMELINES
        .iter()
        .find(|t| matches_any(project_title, t.keywords))
}

fn find_path(skill: &str) -> &'static CuratedPath {
    LEARNING_PATHS
        .iter()
        .find(|p| matches_any(skill, p.keywords))
        .unwrap_or(&LEARNING_PATHS[0])
}

/// Curated milestones for the first timeline whose keywords appear in the title; empty otherwise.
pub fn timeline_for(project_title: &str) -> Timeline {
    match find_timeline(project_title) {
        Some(t) => {
            debug!(curated = t.title, "serving curated timeline");
            Timeline {
                milestones: owned(t.milestones),
            }
        }
        None => Timeline::default(),
    }
}

/// Curated path for the matched skill at `level`. Unmatched skills get the first path (React).
pub fn learning_path_for(skill: &str, level: SkillLevel) -> LearningPath {
    let path = find_path(skill);
    debug!(
        curated = path.skill,
        level = level.as_str(),
        "serving curated learning path"
    );
    let curated = path.level(level);
    LearningPath {
        steps: owned(curated.steps),
        resources: owned(curated.resources),
    }
}

const RECOMMENDATIONS: &[CuratedRecommendation] = &[
    CuratedRecommendation {
        title: "Full-Stack E-commerce Platform",
        description: "Build a complete e-commerce solution with product listings, shopping cart, user authentication, and payment processing. Focus on creating a seamless user experience with responsive design.",
        technologies: &["React", "Node.js", "Express", "MongoDB", "Stripe API"],
        difficulty: SkillLevel::Advanced,
        time_estimate: "4-6 weeks",
        skills: &["Frontend Development", "Backend Development", "API Integration", "Database Design"],
        learning_goals: &["Payment gateway integration", "State management for complex applications", "User authentication and authorization"],
    },
    CuratedRecommendation {
        title: "AI-Powered Content Generator",
        description: "Create a web application that uses machine learning to generate blog posts, social media content, or code snippets based on user prompts and preferences.",
        technologies: &["React", "Python", "Flask", "TensorFlow/PyTorch", "OpenAI API"],
        difficulty: SkillLevel::Intermediate,
        time_estimate: "2-3 weeks",
        skills: &["Frontend Development", "API Integration", "Machine Learning"],
        learning_goals: &["Machine learning integration", "Natural language processing", "API design"],
    },
    CuratedRecommendation {
        title: "Real-time Collaborative Whiteboard",
        description: "Develop a collaborative drawing and diagramming tool where multiple users can work simultaneously. Include features like text notes, shapes, and free-hand drawing.",
        technologies: &["React", "Socket.io", "Node.js", "Canvas API", "Redis"],
        difficulty: SkillLevel::Intermediate,
        time_estimate: "3-4 weeks",
        skills: &["Frontend Development", "Real-time Applications", "WebSockets"],
        learning_goals: &["Real-time data synchronization", "Canvas manipulation", "Collaborative features"],
    },
];

// Order matters: "e-commerce app" should land on the e-commerce timeline, not the mobile one.
const TIMELINES: &[CuratedTimeline] = &[
    CuratedTimeline {
        title: "Portfolio Website",
        keywords: &["portfolio", "website"],
        milestones: &[
            "Project Setup: Initialize repository, set up development environment, and create project structure",
            "Design Phase: Create wireframes, choose color palette, and design component systems",
            "Core Components: Develop reusable UI components like header, footer, cards, and navigation",
            "Content Sections: Implement hero section, about section, projects showcase, and contact form",
            "Animation & Interaction: Add scroll animations, hover effects, and interactive elements",
            "Responsive Design: Ensure site works perfectly on all device sizes from mobile to desktop",
            "Testing & Optimization: Test functionality across browsers, optimize performance, and fix any issues",
            "Deployment: Set up CI/CD pipeline and deploy to production environment",
        ],
    },
    CuratedTimeline {
        title: "E-commerce Platform",
        keywords: &["commerce", "shop", "store"],
        milestones: &[
            "Requirements & Planning: Define features, user stories, and database schema",
            "Backend Development: Set up API routes, database models, and authentication system",
            "Product Catalog: Implement product listing, categories, search, and filtering functionality",
            "User Management: Create user registration, profiles, and address management",
            "Shopping Cart: Develop shopping cart functionality with persistent storage",
            "Checkout Process: Implement payment processing integration and order completion",
            "Admin Dashboard: Create administrative interface for product and order management",
            "Testing & Launch: Perform thorough testing and deploy to production",
        ],
    },
    CuratedTimeline {
        title: "Mobile App",
        keywords: &["mobile", "app", "ios", "android"],
        milestones: &[
            "Concept & Design: Define app concept, create wireframes and mockups",
            "Frontend Framework: Set up React Native or Flutter project and navigation structure",
            "Core Features: Implement main functionality and screens",
            "Data Management: Connect to backend APIs and implement state management",
            "User Authentication: Add login, registration, and profile management",
            "Polish UI/UX: Refine animations, transitions, and overall user experience",
            "Testing: Perform device testing, fix bugs and optimize performance",
            "App Store Preparation: Prepare screenshots, descriptions, and submit to app stores",
        ],
    },
];

// First entry doubles as the default for unmatched skills.
const LEARNING_PATHS: &[CuratedPath] = &[
    CuratedPath {
        skill: "React",
        keywords: &["react", "frontend"],
        beginner: CuratedLevel {
            steps: &[
                "Step 1: Learn HTML, CSS, and JavaScript fundamentals",
                "Step 2: Understand modern JavaScript (ES6+) features",
                "Step 3: Build your first React component",
                "Step 4: Learn about JSX and component composition",
                "Step 5: Explore state and props management",
                "Step 6: Practice with simple applications (todo list, calculator)",
            ],
            resources: &[
                "Resource 1: React Official Documentation - https://reactjs.org/docs/getting-started.html",
                "Resource 2: freeCodeCamp React Course - https://www.freecodecamp.org/learn/front-end-development-libraries/",
                "Resource 3: Egghead.io Beginner's Guide to React - https://egghead.io/courses/the-beginner-s-guide-to-react",
                "Resource 4: React for Beginners by Wes Bos - https://reactforbeginners.com/",
            ],
        },
        intermediate: CuratedLevel {
            steps: &[
                "Step 1: Master React hooks (useState, useEffect, useContext, etc.)",
                "Step 2: Learn advanced patterns (render props, HOCs, compound components)",
                "Step 3: Explore React Router for navigation",
                "Step 4: Implement form handling and validation",
                "Step 5: Study state management libraries (Redux, Zustand, Context API)",
                "Step 6: Build a full-featured application with multiple routes and components",
            ],
            resources: &[
                "Resource 1: React Hooks Documentation - https://reactjs.org/docs/hooks-intro.html",
                "Resource 2: Kent C. Dodds Blog - https://kentcdodds.com/blog/",
                "Resource 3: Epic React by Kent C. Dodds - https://epicreact.dev/",
                "Resource 4: Redux Documentation - https://redux.js.org/introduction/getting-started",
            ],
        },
        advanced: CuratedLevel {
            steps: &[
                "Step 1: Master performance optimization techniques",
                "Step 2: Learn server-side rendering with Next.js",
                "Step 3: Implement code splitting and lazy loading",
                "Step 4: Study advanced state management patterns",
                "Step 5: Explore testing strategies (unit, integration, e2e)",
                "Step 6: Learn about architecture patterns for large applications",
            ],
            resources: &[
                "Resource 1: React Performance Documentation - https://reactjs.org/docs/optimizing-performance.html",
                "Resource 2: Next.js Documentation - https://nextjs.org/docs",
                "Resource 3: Testing Library - https://testing-library.com/docs/react-testing-library/intro/",
                "Resource 4: React Patterns on GitHub - https://github.com/krasimir/react-in-patterns",
            ],
        },
    },
    CuratedPath {
        skill: "Node.js",
        keywords: &["node", "backend"],
        beginner: CuratedLevel {
            steps: &[
                "Step 1: Learn JavaScript fundamentals",
                "Step 2: Install Node.js and understand its architecture",
                "Step 3: Learn about npm and package management",
                "Step 4: Create simple CLI applications",
                "Step 5: Build a basic HTTP server",
                "Step 6: Study asynchronous programming with callbacks and promises",
            ],
            resources: &[
                "Resource 1: Node.js Official Documentation - https://nodejs.org/en/docs/",
                "Resource 2: freeCodeCamp Node.js Course - https://www.freecodecamp.org/learn/apis-and-microservices/",
                "Resource 3: Node.js Crash Course by Traversy Media - https://www.youtube.com/watch?v=fBNz5xF-Kx4",
                "Resource 4: The Complete Node.js Developer Course on Udemy",
            ],
        },
        intermediate: CuratedLevel {
            steps: &[
                "Step 1: Master Express.js framework",
                "Step 2: Learn about Middleware concept",
                "Step 3: Explore database integration (MongoDB, PostgreSQL)",
                "Step 4: Study authentication and security best practices",
                "Step 5: Implement REST APIs with validation",
                "Step 6: Learn about error handling and logging",
            ],
            resources: &[
                "Resource 1: Express.js Documentation - https://expressjs.com/",
                "Resource 2: MongoDB University - https://university.mongodb.com/",
                "Resource 3: JWT Authentication Tutorial - https://www.digitalocean.com/community/tutorials/nodejs-jwt-expressjs",
                "Resource 4: REST API Design Best Practices - https://restfulapi.net/",
            ],
        },
        advanced: CuratedLevel {
            steps: &[
                "Step 1: Learn about microservices architecture",
                "Step 2: Study message queues and event-driven architecture",
                "Step 3: Implement advanced performance optimization techniques",
                "Step 4: Master testing strategies (unit, integration, e2e)",
                "Step 5: Learn about deployment and DevOps practices",
                "Step 6: Explore GraphQL and real-time applications with Socket.io",
            ],
            resources: &[
                "Resource 1: Microservices with Node.js - https://www.nginx.com/blog/building-microservices-using-an-api-gateway/",
                "Resource 2: RabbitMQ Tutorials - https://www.rabbitmq.com/getstarted.html",
                "Resource 3: Node.js Performance Guide - https://nodejs.org/en/docs/guides/dont-block-the-event-loop/",
                "Resource 4: Socket.io Documentation - https://socket.io/docs/v4/",
            ],
        },
    },
    CuratedPath {
        skill: "Python",
        keywords: &["python", "data"],
        beginner: CuratedLevel {
            steps: &[
                "Step 1: Learn Python syntax and basic concepts",
                "Step 2: Understand data types, variables, and operators",
                "Step 3: Practice with control structures (if/else, loops)",
                "Step 4: Learn about functions and modules",
                "Step 5: Explore basic data structures (lists, dictionaries, sets)",
                "Step 6: Build simple scripts and command-line programs",
            ],
            resources: &[
                "Resource 1: Python Official Documentation - https://docs.python.org/3/tutorial/",
                "Resource 2: Automate the Boring Stuff with Python - https://automatetheboringstuff.com/",
                "Resource 3: Python Crash Course by Eric Matthes",
                "Resource 4: freeCodeCamp Python Course - https://www.freecodecamp.org/learn/scientific-computing-with-python/",
            ],
        },
        intermediate: CuratedLevel {
            steps: &[
                "Step 1: Master object-oriented programming in Python",
                "Step 2: Learn file I/O and data handling",
                "Step 3: Explore web development with Flask or Django",
                "Step 4: Study database integration and ORMs",
                "Step 5: Learn about API development",
                "Step 6: Implement error handling and testing",
            ],
            resources: &[
                "Resource 1: Real Python OOP Articles - https://realpython.com/python3-object-oriented-programming/",
                "Resource 2: Flask Documentation - https://flask.palletsprojects.com/",
                "Resource 3: Django Documentation - https://docs.djangoproject.com/",
                "Resource 4: SQLAlchemy Tutorial - https://docs.sqlalchemy.org/en/14/orm/tutorial.html",
            ],
        },
        advanced: CuratedLevel {
            steps: &[
                "Step 1: Explore data science with NumPy, Pandas, and Matplotlib",
                "Step 2: Learn about machine learning with scikit-learn or TensorFlow",
                "Step 3: Study advanced Python concepts (decorators, generators, context managers)",
                "Step 4: Implement performance optimization techniques",
                "Step 5: Learn about concurrent programming (threading, multiprocessing, asyncio)",
                "Step 6: Explore deployment and DevOps practices",
            ],
            resources: &[
                "Resource 1: Python Data Science Handbook - https://jakevdp.github.io/PythonDataScienceHandbook/",
                "Resource 2: TensorFlow Documentation - https://www.tensorflow.org/learn",
                "Resource 3: Advanced Python Features - https://realpython.com/python-advanced-features/",
                "Resource 4: Fluent Python by Luciano Ramalho",
            ],
        },
    },
];
