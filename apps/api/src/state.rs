use std::sync::Arc;

use crate::ai_tools::gateway::AiGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider chain resolved once at startup; read-only afterwards.
    pub gateway: Arc<AiGateway>,
}
