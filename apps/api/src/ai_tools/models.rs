use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{AppError, FieldErrors};

/// Proficiency of the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Capability results
//
// Decoded from model output, so every field accepts whatever JSON shape the model
// sent and flattens it to text. Only the top-level keys are required.
// ────────────────────────────────────────────────────────────────────────────

/// Renders one JSON value as a line of text. `{title, description}` objects become
/// `"title: description"`.
fn flatten_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Object(map) => {
            let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);
            match (field("title").or_else(|| field("name")), field("description")) {
                (Some(title), Some(description)) => Some(format!("{title}: {description}")),
                (Some(text), None) | (None, Some(text)) => Some(text),
                (None, None) => serde_json::to_string(&map).ok(),
            }
        }
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(flatten_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(flatten_text).collect(),
        other => flatten_text(other).into_iter().collect(),
    })
}

/// A suggested project. `difficulty` is passed through as the model wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_estimate: String,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub learning_goals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(deserialize_with = "lenient_text_list")]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    #[serde(deserialize_with = "lenient_text_list")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub resources: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Request payloads (as received) and their validated forms
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/ai/project-recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationsPayload {
    pub skills: Value,
    pub interests: Value,
    pub completed_projects: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsQuery {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub completed_projects: Vec<String>,
}

/// Body of `POST /api/ai/project-timeline`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelinePayload {
    pub project_title: Value,
    pub technologies: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineQuery {
    pub project_title: String,
    pub technologies: Vec<String>,
}

/// Body of `POST /api/ai/learning-path`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LearningPathPayload {
    pub skill: Value,
    pub current_level: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LearningPathQuery {
    pub skill: String,
    pub level: SkillLevel,
}

/// Trims entries and drops blank ones.
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl RecommendationsPayload {
    pub fn validate(self) -> Result<RecommendationsQuery, AppError> {
        let mut errors = FieldErrors::new();
        let skills = errors.string_list("skills", self.skills).map(clean_list);
        let interests = errors.string_list("interests", self.interests).map(clean_list);
        let completed_projects = errors
            .string_list("completedProjects", self.completed_projects)
            .map(clean_list);

        if skills.as_ref().is_some_and(Vec::is_empty) {
            errors.push("skills", "At least one skill is required");
        }
        if interests.as_ref().is_some_and(Vec::is_empty) {
            errors.push("interests", "At least one interest is required");
        }

        match (skills, interests, completed_projects) {
            (Some(skills), Some(interests), Some(completed_projects)) => {
                errors.into_result(RecommendationsQuery {
                    skills,
                    interests,
                    completed_projects,
                })
            }
            _ => Err(AppError::InvalidFields(errors)),
        }
    }
}

impl TimelinePayload {
    pub fn validate(self) -> Result<TimelineQuery, AppError> {
        let mut errors = FieldErrors::new();
        let project_title = errors
            .string("projectTitle", self.project_title)
            .map(|s| s.trim().to_string());
        let technologies = errors
            .string_list("technologies", self.technologies)
            .map(clean_list);

        if project_title.as_ref().is_some_and(String::is_empty) {
            errors.push("projectTitle", "Project title is required");
        }

        match (project_title, technologies) {
            (Some(project_title), Some(technologies)) => errors.into_result(TimelineQuery {
                project_title,
                technologies,
            }),
            _ => Err(AppError::InvalidFields(errors)),
        }
    }
}

impl LearningPathPayload {
    pub fn validate(self) -> Result<LearningPathQuery, AppError> {
        let mut errors = FieldErrors::new();
        let skill = errors
            .string("skill", self.skill)
            .map(|s| s.trim().to_string());
        let level = match errors.string("currentLevel", self.current_level) {
            Some(raw) => {
                let level = SkillLevel::parse(&raw);
                if level.is_none() {
                    errors.push(
                        "currentLevel",
                        "Expected 'beginner' | 'intermediate' | 'advanced'",
                    );
                }
                level
            }
            None => None,
        };

        if skill.as_ref().is_some_and(String::is_empty) {
            errors.push("skill", "Skill is required");
        }

        match (skill, level) {
            (Some(skill), Some(level)) => errors.into_result(LearningPathQuery { skill, level }),
            _ => Err(AppError::InvalidFields(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::InvalidFields(fields) => fields,
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn test_skill_level_parse_is_case_insensitive() {
        assert_eq!(SkillLevel::parse("Beginner"), Some(SkillLevel::Beginner));
        assert_eq!(SkillLevel::parse(" ADVANCED "), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("expert"), None);
    }

    #[test]
    fn test_recommendation_keeps_difficulty_as_written() {
        let rec: ProjectRecommendation = serde_json::from_str(
            r#"{"title": "CLI todo app", "difficulty": "Beginner-Intermediate", "timeEstimate": "2 days"}"#,
        )
        .unwrap();
        assert_eq!(rec.difficulty, "Beginner-Intermediate");
        assert_eq!(rec.time_estimate, "2 days");
        assert!(rec.technologies.is_empty());
        assert!(rec.learning_goals.is_empty());
    }

    #[test]
    fn test_recommendation_tolerates_odd_field_shapes() {
        let rec: ProjectRecommendation = serde_json::from_str(
            r#"{"description": "no title", "technologies": "Rust", "timeEstimate": 3, "skills": null}"#,
        )
        .unwrap();
        assert_eq!(rec.title, "");
        assert_eq!(rec.difficulty, "");
        assert_eq!(rec.technologies, vec!["Rust"]);
        assert_eq!(rec.time_estimate, "3");
        assert!(rec.skills.is_empty());
    }

    #[test]
    fn test_timeline_flattens_object_milestones() {
        let timeline: Timeline = serde_json::from_str(
            r#"{"milestones": [{"title": "Setup", "description": "init repo"}, "Ship", {"name": "Demo"}]}"#,
        )
        .unwrap();
        assert_eq!(timeline.milestones, vec!["Setup: init repo", "Ship", "Demo"]);
    }

    #[test]
    fn test_timeline_still_requires_milestones_key() {
        assert!(serde_json::from_str::<Timeline>(r#"{"steps": ["a"]}"#).is_err());
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = ProjectRecommendation {
            title: "t".into(),
            description: "d".into(),
            technologies: vec!["Rust".into()],
            difficulty: "advanced".into(),
            time_estimate: "1 week".into(),
            skills: vec![],
            learning_goals: vec!["async".into()],
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["timeEstimate"], "1 week");
        assert_eq!(value["learningGoals"][0], "async");
        assert_eq!(value["difficulty"], "advanced");
    }

    #[test]
    fn test_recommendations_payload_requires_skills_and_interests() {
        let payload: RecommendationsPayload =
            serde_json::from_str(r#"{"skills": ["  "], "completedProjects": []}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert!(errors.get("skills").is_some());
        assert!(errors.get("interests").is_some());
        assert!(errors.get("completedProjects").is_none());
    }

    #[test]
    fn test_recommendations_payload_cleans_lists() {
        let payload: RecommendationsPayload = serde_json::from_str(
            r#"{"skills": [" Rust ", ""], "interests": ["CLIs"], "completedProjects": ["", "blog"]}"#,
        )
        .unwrap();
        let query = payload.validate().unwrap();
        assert_eq!(query.skills, vec!["Rust"]);
        assert_eq!(query.completed_projects, vec!["blog"]);
    }

    #[test]
    fn test_timeline_payload_requires_title() {
        let payload: TimelinePayload =
            serde_json::from_str(r#"{"projectTitle": "   ", "technologies": ["React"]}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert!(errors.get("projectTitle").is_some());
    }

    #[test]
    fn test_timeline_payload_allows_no_technologies() {
        let payload: TimelinePayload =
            serde_json::from_str(r#"{"projectTitle": "Portfolio"}"#).unwrap();
        let query = payload.validate().unwrap();
        assert_eq!(query.project_title, "Portfolio");
        assert!(query.technologies.is_empty());
    }

    #[test]
    fn test_learning_path_payload_rejects_unknown_level() {
        let payload: LearningPathPayload =
            serde_json::from_str(r#"{"skill": "react", "currentLevel": "guru"}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert!(errors.get("currentLevel").is_some());
        assert!(errors.get("skill").is_none());
    }

    #[test]
    fn test_learning_path_payload_reports_both_fields() {
        let errors = field_errors(LearningPathPayload::default().validate().unwrap_err());
        assert!(errors.get("skill").is_some());
        assert!(errors.get("currentLevel").is_some());
    }

    #[test]
    fn test_payload_type_errors_are_reported_per_field() {
        let payload: RecommendationsPayload =
            serde_json::from_str(r#"{"skills": "Rust", "interests": ["Games", 3]}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            errors.get("skills").unwrap(),
            ["Expected array, received string".to_string()]
        );
        assert!(errors.get("interests").is_some());

        let payload: TimelinePayload = serde_json::from_str(r#"{"projectTitle": 7}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            errors.get("projectTitle").unwrap(),
            ["Expected string, received number".to_string()]
        );

        let payload: LearningPathPayload =
            serde_json::from_str(r#"{"skill": "react", "currentLevel": true}"#).unwrap();
        let errors = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            errors.get("currentLevel").unwrap(),
            ["Expected string, received boolean".to_string()]
        );
    }

    #[test]
    fn test_learning_path_payload_valid() {
        let payload: LearningPathPayload =
            serde_json::from_str(r#"{"skill": "react", "currentLevel": "beginner"}"#).unwrap();
        assert_eq!(
            payload.validate().unwrap(),
            LearningPathQuery {
                skill: "react".into(),
                level: SkillLevel::Beginner
            }
        );
    }
}
