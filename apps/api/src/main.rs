mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
mod style;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::style::UnicodeTokenizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scribe API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_api_base,
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if !config.generate_send_instruction {
        warn!(
            "POST /generate sends only the raw prompt to the model; \
             set GENERATE_SEND_INSTRUCTION=true to send the composed instruction"
        );
    }

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        tokenizer: Arc::new(UnicodeTokenizer),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
