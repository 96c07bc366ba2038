mod ai_tools;
mod config;
mod contact;
mod errors;
mod llm_client;
mod portfolio;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai_tools::gateway::AiGateway;
use crate::config::Config;
use crate::llm_client::selection::{build_chain, Credentials};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve AI providers once; the chain is immutable for the life of the process
    let credentials = Credentials {
        perplexity: config.perplexity_api_key.clone(),
        openai: config.openai_api_key.clone(),
    };
    let providers = build_chain(&credentials).context("Failed to build AI provider clients")?;
    let gateway = AiGateway::new(providers, config.static_fallback);
    info!(
        "AI gateway ready (static fallback: {})",
        if gateway.static_fallback() { "on" } else { "off" }
    );

    let state = AppState {
        gateway: Arc::new(gateway),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
