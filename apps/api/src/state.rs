use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobSearchGateway;
use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Inference client. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn Completion>,
    pub jobs: JobSearchGateway,
    pub config: Config,
}
