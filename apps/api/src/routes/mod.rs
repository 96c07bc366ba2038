pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai_tools::handlers as ai;
use crate::contact::handlers as contact;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact intake
        .route("/api/contact", post(contact::handle_contact))
        // AI tools
        .route("/api/ai/status", get(ai::handle_ai_status))
        .route(
            "/api/ai/project-recommendations",
            post(ai::handle_project_recommendations),
        )
        .route(
            "/api/ai/project-timeline",
            post(ai::handle_project_timeline),
        )
        .route("/api/ai/learning-path", post(ai::handle_learning_path))
        // Portfolio content
        .route("/api/portfolio/skills", get(portfolio::handle_skills))
        .route("/api/portfolio/fun-facts", get(portfolio::handle_fun_facts))
        .route("/api/portfolio/projects", get(portfolio::handle_projects))
        .with_state(state)
}
