//! AI gateway: walks the configured provider chain for a capability request.
//!
//! Policy: each provider in the chain is tried at most once, in precedence order.
//! Transport errors, non-2xx replies, empty content and undecodable text all count as a
//! failed attempt. When the chain is exhausted the capability's static dataset (or its
//! empty default, if static fallback is disabled) is returned. Nothing is ever raised.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ai_tools::capability::Capability;
use crate::llm_client::selection::ProviderAvailability;
use crate::llm_client::{CompletionProvider, ProviderKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackSource {
    Static,
    Empty,
}

/// Result of one dispatch: either a provider answered, or the chain ran out.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Answered { provider: ProviderKind, value: T },
    Exhausted { source: FallbackSource, value: T },
}

impl<T> Outcome<T> {
    pub fn into_value(self) -> T {
        match self {
            Outcome::Answered { value, .. } | Outcome::Exhausted { value, .. } => value,
        }
    }

    /// `perplexity`, `openai`, `static` or `empty`.
    pub fn source_label(&self) -> &'static str {
        match self {
            Outcome::Answered { provider, .. } => provider.as_str(),
            Outcome::Exhausted {
                source: FallbackSource::Static,
                ..
            } => "static",
            Outcome::Exhausted {
                source: FallbackSource::Empty,
                ..
            } => "empty",
        }
    }
}

pub struct AiGateway {
    providers: Vec<Arc<dyn CompletionProvider>>,
    availability: ProviderAvailability,
    static_fallback: bool,
}

impl AiGateway {
    /// `providers` must already be in precedence order.
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>, static_fallback: bool) -> Self {
        let availability = ProviderAvailability::from_chain(&providers);
        Self {
            providers,
            availability,
            static_fallback,
        }
    }

    pub fn availability(&self) -> ProviderAvailability {
        self.availability
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    pub fn static_fallback(&self) -> bool {
        self.static_fallback
    }

    pub async fn dispatch<C: Capability>(&self, request: &C) -> Outcome<C::Output> {
        let prompt = request.prompt();

        for provider in &self.providers {
            let kind = provider.kind();

            let text = match provider.complete(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(capability = C::NAME, provider = %kind, "provider call failed: {e}");
                    continue;
                }
            };

            match C::decode(&text) {
                Ok(value) => {
                    info!(capability = C::NAME, provider = %kind, "provider answered");
                    return Outcome::Answered {
                        provider: kind,
                        value,
                    };
                }
                Err(e) => {
                    warn!(capability = C::NAME, provider = %kind, "{e}");
                }
            }
        }

        let source = if self.static_fallback {
            FallbackSource::Static
        } else {
            FallbackSource::Empty
        };

        if self.providers.is_empty() {
            info!(capability = C::NAME, ?source, "no AI provider configured, serving fallback");
        } else {
            warn!(capability = C::NAME, ?source, "all AI providers failed, serving fallback");
        }

        let value = match source {
            FallbackSource::Static => request.static_fallback(),
            FallbackSource::Empty => C::Output::default(),
        };

        Outcome::Exhausted { source, value }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedProvider;
    use super::*;
    use crate::ai_tools::fallback;
    use crate::ai_tools::models::{
        LearningPathQuery, RecommendationsQuery, SkillLevel, Timeline, TimelineQuery,
    };

    const TIMELINE_JSON: &str = r#"{"milestones": ["Design", "Build", "Ship"]}"#;

    fn timeline_query() -> TimelineQuery {
        TimelineQuery {
            project_title: "Ray tracer".into(),
            technologies: vec!["Rust".into()],
        }
    }

    fn gateway(providers: &[Arc<ScriptedProvider>], static_fallback: bool) -> AiGateway {
        let chain: Vec<Arc<dyn CompletionProvider>> = providers
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn CompletionProvider>)
            .collect();
        AiGateway::new(chain, static_fallback)
    }

    #[tokio::test]
    async fn test_primary_answers_secondary_untouched() {
        let primary = Arc::new(ScriptedProvider::answering(
            ProviderKind::Perplexity,
            TIMELINE_JSON,
        ));
        let secondary = Arc::new(ScriptedProvider::answering(ProviderKind::OpenAi, TIMELINE_JSON));
        let gw = gateway(&[primary.clone(), secondary.clone()], true);

        let outcome = gw.dispatch(&timeline_query()).await;

        assert_eq!(outcome.source_label(), "perplexity");
        assert_eq!(outcome.into_value().milestones.len(), 3);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_primary_falls_back_once_to_secondary() {
        let primary = Arc::new(ScriptedProvider::answering(
            ProviderKind::Perplexity,
            "Here is your timeline, enjoy!",
        ));
        let secondary = Arc::new(ScriptedProvider::answering(ProviderKind::OpenAi, TIMELINE_JSON));
        let gw = gateway(&[primary.clone(), secondary.clone()], true);

        let outcome = gw.dispatch(&timeline_query()).await;

        assert_eq!(
            outcome,
            Outcome::Answered {
                provider: ProviderKind::OpenAi,
                value: Timeline {
                    milestones: vec!["Design".into(), "Build".into(), "Ship".into()]
                }
            }
        );
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_secondary_receives_identical_prompt() {
        let primary = Arc::new(ScriptedProvider::failing(ProviderKind::Perplexity));
        let secondary = Arc::new(ScriptedProvider::answering(ProviderKind::OpenAi, TIMELINE_JSON));
        let gw = gateway(&[primary.clone(), secondary.clone()], true);

        gw.dispatch(&timeline_query()).await;

        assert_eq!(primary.last_prompt(), secondary.last_prompt());
        assert_eq!(primary.last_prompt(), Some(timeline_query().prompt()));
    }

    #[tokio::test]
    async fn test_both_fail_returns_static_after_one_attempt_each() {
        let primary = Arc::new(ScriptedProvider::new(
            ProviderKind::Perplexity,
            vec![Some("oops"), Some(TIMELINE_JSON)],
        ));
        let secondary = Arc::new(ScriptedProvider::failing(ProviderKind::OpenAi));
        let gw = gateway(&[primary.clone(), secondary.clone()], true);

        let query = LearningPathQuery {
            skill: "node".into(),
            level: SkillLevel::Advanced,
        };
        let outcome = gw.dispatch(&query).await;

        assert_eq!(outcome.source_label(), "static");
        assert_eq!(
            outcome.into_value(),
            fallback::learning_path_for("node", SkillLevel::Advanced)
        );
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_only_secondary_configured_is_used() {
        let secondary = Arc::new(ScriptedProvider::answering(
            ProviderKind::OpenAi,
            r#"{"recommendations": [{"title": "Key-value store", "difficulty": "advanced"}]}"#,
        ));
        let gw = gateway(&[secondary.clone()], true);

        let outcome = gw
            .dispatch(&RecommendationsQuery {
                skills: vec!["Rust".into()],
                interests: vec!["Storage".into()],
                completed_projects: vec![],
            })
            .await;

        match outcome {
            Outcome::Answered { provider, value } => {
                assert_eq!(provider, ProviderKind::OpenAi);
                assert_eq!(value[0].title, "Key-value store");
                assert_eq!(value[0].difficulty, "advanced");
            }
            other => panic!("expected an answer, got {other:?}"),
        }
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_no_providers_serves_static_react_beginner() {
        let gw = AiGateway::new(Vec::new(), true);
        let query = LearningPathQuery {
            skill: "react".into(),
            level: SkillLevel::Beginner,
        };

        let outcome = gw.dispatch(&query).await;

        assert_eq!(outcome.source_label(), "static");
        let path = outcome.into_value();
        assert_eq!(path.steps.len(), 6);
        assert_eq!(path.resources.len(), 4);
        assert!(path.steps[2].contains("first React component"));
    }

    #[tokio::test]
    async fn test_no_providers_without_static_returns_empty_defaults() {
        let gw = AiGateway::new(Vec::new(), false);

        let recs = gw
            .dispatch(&RecommendationsQuery {
                skills: vec!["Go".into()],
                interests: vec!["CLIs".into()],
                completed_projects: vec![],
            })
            .await;
        assert_eq!(recs.source_label(), "empty");
        assert!(recs.into_value().is_empty());

        let timeline = gw.dispatch(&timeline_query()).await;
        assert_eq!(
            timeline,
            Outcome::Exhausted {
                source: FallbackSource::Empty,
                value: Timeline::default()
            }
        );
    }

    #[tokio::test]
    async fn test_availability_reflects_chain() {
        let secondary = Arc::new(ScriptedProvider::failing(ProviderKind::OpenAi));
        let gw = gateway(&[secondary], true);
        let availability = gw.availability();
        assert!(!availability.perplexity);
        assert!(availability.openai);
        assert!(gw.has_providers());
    }
}
