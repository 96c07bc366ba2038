//! One AI tool operation: how to prompt for it, how to decode the reply,
//! and what to serve when no provider answers.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::ai_tools::fallback;
use crate::ai_tools::models::{
    LearningPath, LearningPathQuery, ProjectRecommendation, RecommendationsQuery, Timeline,
    TimelineQuery,
};
use crate::ai_tools::prompts::{
    fill_template, join_or_none, LEARNING_PATH_PROMPT_TEMPLATE, LEARNING_PATH_ROLE,
    RECOMMENDATIONS_PROMPT_TEMPLATE, RECOMMENDATIONS_ROLE, TIMELINE_PROMPT_TEMPLATE,
    TIMELINE_ROLE,
};
use crate::llm_client::prompts::json_only_system;
use crate::llm_client::{extract_json, PromptPair};

/// The upstream reply text could not be turned into the capability's result type.
#[derive(Debug, Error)]
#[error("{capability} reply did not decode: {source}")]
pub struct DecodeError {
    pub capability: &'static str,
    #[source]
    pub source: serde_json::Error,
}

pub trait Capability: Send + Sync {
    type Output: Serialize + Default + Send;

    /// Short name used in logs.
    const NAME: &'static str;

    fn prompt(&self) -> PromptPair;

    fn decode(text: &str) -> Result<Self::Output, DecodeError>;

    /// Curated answer for this request, used when every provider fails.
    fn static_fallback(&self) -> Self::Output;
}

/// Parses the JSON embedded in `text` into `T`, tagging failures with the capability name.
fn decode_reply<T: DeserializeOwned>(capability: &'static str, text: &str) -> Result<T, DecodeError> {
    serde_json::from_str(extract_json(text))
        .map_err(|source| DecodeError { capability, source })
}

/// Models sometimes drop the envelope and return the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationsReply {
    Envelope { recommendations: Vec<Value> },
    Bare(Vec<Value>),
}

impl Capability for RecommendationsQuery {
    type Output = Vec<ProjectRecommendation>;
    const NAME: &'static str = "project-recommendations";

    fn prompt(&self) -> PromptPair {
        PromptPair {
            system: json_only_system(RECOMMENDATIONS_ROLE),
            user: fill_template(
                RECOMMENDATIONS_PROMPT_TEMPLATE,
                &[
                    ("skills", join_or_none(&self.skills).as_str()),
                    ("interests", join_or_none(&self.interests).as_str()),
                    (
                        "completed_projects",
                        join_or_none(&self.completed_projects).as_str(),
                    ),
                ],
            ),
        }
    }

    fn decode(text: &str) -> Result<Self::Output, DecodeError> {
        let records = match decode_reply::<RecommendationsReply>(Self::NAME, text)? {
            RecommendationsReply::Envelope { recommendations } => recommendations,
            RecommendationsReply::Bare(recommendations) => recommendations,
        };
        // Records that are not objects are dropped; the rest of the reply is kept.
        Ok(records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect())
    }

    fn static_fallback(&self) -> Self::Output {
        fallback::curated_recommendations()
    }
}

impl Capability for TimelineQuery {
    type Output = Timeline;
    const NAME: &'static str = "project-timeline";

    fn prompt(&self) -> PromptPair {
        PromptPair {
            system: json_only_system(TIMELINE_ROLE),
            user: fill_template(
                TIMELINE_PROMPT_TEMPLATE,
                &[
                    ("project_title", self.project_title.as_str()),
                    ("technologies", join_or_none(&self.technologies).as_str()),
                ],
            ),
        }
    }

    fn decode(text: &str) -> Result<Self::Output, DecodeError> {
        decode_reply(Self::NAME, text)
    }

    fn static_fallback(&self) -> Self::Output {
        fallback::timeline_for(&self.project_title)
    }
}

impl Capability for LearningPathQuery {
    type Output = LearningPath;
    const NAME: &'static str = "learning-path";

    fn prompt(&self) -> PromptPair {
        PromptPair {
            system: json_only_system(LEARNING_PATH_ROLE),
            user: fill_template(
                LEARNING_PATH_PROMPT_TEMPLATE,
                &[
                    ("skill", self.skill.as_str()),
                    ("current_level", self.level.as_str()),
                ],
            ),
        }
    }

    fn decode(text: &str) -> Result<Self::Output, DecodeError> {
        decode_reply(Self::NAME, text)
    }

    fn static_fallback(&self) -> Self::Output {
        fallback::learning_path_for(&self.skill, self.level)
    }
}
