// Job search: a gateway over two listing providers.
// Provider failures never reach the caller; they become empty result sets.

pub mod apify;
pub mod gateway;
pub mod listing;

use async_trait::async_trait;
use thiserror::Error;

pub use gateway::{JobSearchGateway, JobSearchResults};
pub use listing::JobListing;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("APIFY_API_TOKEN is not configured")]
    MissingToken,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A remote job-listing search. Implement this to add or swap a job board
/// without touching the gateway or the handlers.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, keywords: &str) -> Result<Vec<JobListing>, ProviderError>;
}
