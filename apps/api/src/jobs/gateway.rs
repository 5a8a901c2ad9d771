use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::jobs::{JobListing, JobProvider};

/// Listings per provider, each in the order the provider returned them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobSearchResults {
    pub linkedin: Vec<JobListing>,
    pub naukri: Vec<JobListing>,
}

/// Fans a keyword string out to the LinkedIn and Naukri providers.
#[derive(Clone)]
pub struct JobSearchGateway {
    linkedin: Arc<dyn JobProvider>,
    naukri: Arc<dyn JobProvider>,
}

impl JobSearchGateway {
    pub fn new(linkedin: Arc<dyn JobProvider>, naukri: Arc<dyn JobProvider>) -> Self {
        Self { linkedin, naukri }
    }

    /// Queries both providers in turn. `keywords` must already be cleaned.
    /// A failing provider contributes an empty list and does not affect the other.
    pub async fn search(&self, keywords: &str) -> JobSearchResults {
        info!("Fetching jobs for '{keywords}'...");

        let linkedin = fetch_or_empty(self.linkedin.as_ref(), keywords).await;
        let naukri = fetch_or_empty(self.naukri.as_ref(), keywords).await;

        info!(
            linkedin = linkedin.len(),
            naukri = naukri.len(),
            "Job search finished"
        );
        JobSearchResults { linkedin, naukri }
    }
}

async fn fetch_or_empty(provider: &dyn JobProvider, keywords: &str) -> Vec<JobListing> {
    match provider.search(keywords).await {
        Ok(listings) => listings,
        Err(e) => {
            warn!(
                provider = provider.name(),
                "Job search failed, showing no listings: {e}"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{listing, StubProvider};

    #[tokio::test]
    async fn test_both_providers_receive_keywords() {
        let linkedin = Arc::new(StubProvider::returning("linkedin", vec![]));
        let naukri = Arc::new(StubProvider::returning("naukri", vec![]));
        let gateway = JobSearchGateway::new(linkedin.clone(), naukri.clone());

        gateway.search("Python, Backend").await;

        assert_eq!(linkedin.queries(), vec!["Python, Backend"]);
        assert_eq!(naukri.queries(), vec!["Python, Backend"]);
    }

    #[tokio::test]
    async fn test_provider_order_is_preserved() {
        let listings = vec![
            listing("C", "c", None, "https://c"),
            listing("A", "a", None, "https://a"),
            listing("B", "b", None, "https://b"),
        ];
        let gateway = JobSearchGateway::new(
            Arc::new(StubProvider::returning("linkedin", listings.clone())),
            Arc::new(StubProvider::returning("naukri", vec![])),
        );

        let results = gateway.search("Rust").await;
        assert_eq!(results.linkedin, listings);
        assert!(results.naukri.is_empty());
    }

    #[tokio::test]
    async fn test_failing_provider_degrades_to_empty_only_for_itself() {
        let naukri_listings = vec![
            listing("One", "x", Some("Pune"), "https://1"),
            listing("Two", "y", None, "https://2"),
        ];
        let gateway = JobSearchGateway::new(
            Arc::new(StubProvider::failing("linkedin", "rate limited")),
            Arc::new(StubProvider::returning("naukri", naukri_listings.clone())),
        );

        let results = gateway.search("Rust").await;
        assert!(results.linkedin.is_empty());
        assert_eq!(results.naukri, naukri_listings);
    }
}
