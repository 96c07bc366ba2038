//! Provider availability: decides once, at startup, which providers are reachable.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::{ChatCompletionsClient, CompletionProvider, LlmError, ProviderKind};

/// Precedence when several credentials are configured. First entry is the primary provider.
pub const PROVIDER_PRECEDENCE: [ProviderKind; 2] = [ProviderKind::Perplexity, ProviderKind::OpenAi];

/// Which provider a capability call goes to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSelection {
    Primary,
    Secondary,
    None,
}

impl ProviderSelection {
    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            ProviderSelection::Primary => Some(PROVIDER_PRECEDENCE[0]),
            ProviderSelection::Secondary => Some(PROVIDER_PRECEDENCE[1]),
            ProviderSelection::None => None,
        }
    }
}

/// Raw credential strings. Empty means "not configured".
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub perplexity: String,
    pub openai: String,
}

impl Credentials {
    pub fn key_for(&self, kind: ProviderKind) -> Option<&str> {
        let key = match kind {
            ProviderKind::Perplexity => self.perplexity.trim(),
            ProviderKind::OpenAi => self.openai.trim(),
        };
        (!key.is_empty()).then_some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    pub is_available: bool,
    pub requires_key: bool,
}

impl ProviderStatus {
    fn new(is_available: bool) -> Self {
        Self {
            is_available,
            requires_key: !is_available,
        }
    }
}

/// Read-only snapshot of which providers were configured at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderAvailability {
    pub perplexity: bool,
    pub openai: bool,
}

impl ProviderAvailability {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            perplexity: credentials.key_for(ProviderKind::Perplexity).is_some(),
            openai: credentials.key_for(ProviderKind::OpenAi).is_some(),
        }
    }

    /// Availability as seen by an already-built provider chain.
    pub fn from_chain(chain: &[Arc<dyn CompletionProvider>]) -> Self {
        Self {
            perplexity: chain.iter().any(|p| p.kind() == ProviderKind::Perplexity),
            openai: chain.iter().any(|p| p.kind() == ProviderKind::OpenAi),
        }
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Perplexity => self.perplexity,
            ProviderKind::OpenAi => self.openai,
        }
    }

    pub fn any(&self) -> bool {
        self.perplexity || self.openai
    }

    pub fn selection(&self) -> ProviderSelection {
        if self.is_available(PROVIDER_PRECEDENCE[0]) {
            ProviderSelection::Primary
        } else if self.is_available(PROVIDER_PRECEDENCE[1]) {
            ProviderSelection::Secondary
        } else {
            ProviderSelection::None
        }
    }

    /// Configured providers in fallback order.
    pub fn chain_order(&self) -> Vec<ProviderKind> {
        PROVIDER_PRECEDENCE
            .into_iter()
            .filter(|kind| self.is_available(*kind))
            .collect()
    }

    pub fn status(&self) -> AiStatus {
        AiStatus {
            perplexity: ProviderStatus::new(self.perplexity),
            openai: ProviderStatus::new(self.openai),
            any_available: self.any(),
            active: self.selection().provider(),
        }
    }
}

/// Body of `GET /api/ai/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    pub perplexity: ProviderStatus,
    pub openai: ProviderStatus,
    pub any_available: bool,
    /// `null` when no provider is configured.
    pub active: Option<ProviderKind>,
}

/// Builds one client per configured credential, in precedence order, and announces the choice.
pub fn build_chain(credentials: &Credentials) -> Result<Vec<Arc<dyn CompletionProvider>>, LlmError> {
    let availability = ProviderAvailability::from_credentials(credentials);

    let mut chain: Vec<Arc<dyn CompletionProvider>> = Vec::new();
    for kind in availability.chain_order() {
        if let Some(key) = credentials.key_for(kind) {
            chain.push(Arc::new(ChatCompletionsClient::new(kind, key.to_string())?));
        }
    }

    match availability.selection().provider() {
        Some(active) => info!(
            "AI provider selected: {active} (model: {}), fallback chain: [{}]",
            active.model(),
            availability
                .chain_order()
                .iter()
                .map(ProviderKind::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None => warn!("No AI provider configured; AI tools will serve fallback data"),
    }

    Ok(chain)
}
