mod analysis;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod render;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod testing;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::apify::ApifyProvider;
use crate::jobs::JobSearchGateway;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values; credentials may be absent)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Recommender v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone())?;
    if llm.has_credential() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GROQ_API_KEY is not set; analysis requests will fail until it is configured");
    }

    // Initialize job providers
    if config.apify_api_token.is_none() {
        warn!("APIFY_API_TOKEN is not set; job searches will return no listings");
    }
    let (linkedin, naukri) = ApifyProvider::pair_from_config(&config)?;
    let jobs = JobSearchGateway::new(Arc::new(linkedin), Arc::new(naukri));
    info!(
        "Job providers initialized (location: {}, rows: {})",
        config.job_location, config.job_rows
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        jobs,
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
