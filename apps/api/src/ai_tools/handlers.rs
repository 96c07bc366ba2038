//! Axum route handlers for the AI tools API.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::ai_tools::capability::Capability;
use crate::ai_tools::models::{LearningPathPayload, RecommendationsPayload, TimelinePayload};
use crate::errors::AppError;
use crate::llm_client::selection::AiStatus;
use crate::state::AppState;

/// Response header naming where the body came from: a provider, `static` or `empty`.
pub const AI_SOURCE_HEADER: &str = "x-ai-source";

/// Runs a validated capability through the gateway and renders the outcome.
async fn serve<C>(state: &AppState, query: C) -> Result<Response, AppError>
where
    C: Capability,
{
    if !state.gateway.has_providers() && !state.gateway.static_fallback() {
        return Err(AppError::AiUnavailable);
    }

    let outcome = state.gateway.dispatch(&query).await;
    let source = outcome.source_label();
    Ok(([(AI_SOURCE_HEADER, source)], Json(outcome.into_value())).into_response())
}

/// POST /api/ai/project-recommendations
pub async fn handle_project_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationsPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    serve(&state, payload.validate()?).await
}

/// POST /api/ai/project-timeline
pub async fn handle_project_timeline(
    State(state): State<AppState>,
    payload: Result<Json<TimelinePayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    serve(&state, payload.validate()?).await
}

/// POST /api/ai/learning-path
pub async fn handle_learning_path(
    State(state): State<AppState>,
    payload: Result<Json<LearningPathPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    serve(&state, payload.validate()?).await
}

/// GET /api/ai/status
///
/// Which providers were configured at startup and which one is tried first.
pub async fn handle_ai_status(State(state): State<AppState>) -> Json<AiStatus> {
    Json(state.gateway.availability().status())
}
