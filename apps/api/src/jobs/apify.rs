//! Job providers backed by Apify scraper actors.
//!
//! Each provider runs its actor synchronously and reads the dataset items
//! straight from the response, so one search is one HTTP request.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::jobs::listing::parse_listings;
use crate::jobs::{JobListing, JobProvider, ProviderError};

const APIFY_API_URL: &str = "https://api.apify.com/v2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobBoard {
    LinkedIn,
    Naukri,
}

impl JobBoard {
    pub fn name(self) -> &'static str {
        match self {
            JobBoard::LinkedIn => "linkedin",
            JobBoard::Naukri => "naukri",
        }
    }

    /// Actor input for a search. The two actors take differently named fields.
    fn run_input(self, keywords: &str, location: &str, rows: u32) -> Value {
        match self {
            JobBoard::LinkedIn => json!({
                "title": keywords,
                "location": location,
                "rows": rows,
                "proxy": {
                    "useApifyProxy": true,
                    "apifyProxyGroups": ["RESIDENTIAL"]
                }
            }),
            JobBoard::Naukri => json!({
                "keyword": keywords,
                "maxJobs": rows,
                "freshness": "all",
                "sortBy": "relevance",
                "experience": "all"
            }),
        }
    }
}

pub struct ApifyProvider {
    client: Client,
    token: Option<String>,
    board: JobBoard,
    actor_id: String,
    location: String,
    rows: u32,
}

impl ApifyProvider {
    pub fn new(
        client: Client,
        token: Option<String>,
        board: JobBoard,
        actor_id: String,
        location: String,
        rows: u32,
    ) -> Self {
        Self {
            client,
            token,
            board,
            actor_id,
            location,
            rows,
        }
    }

    /// Builds the LinkedIn and Naukri providers from configuration, sharing one HTTP client.
    pub fn pair_from_config(
        config: &Config,
    ) -> Result<(ApifyProvider, ApifyProvider), ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()?;

        let linkedin = ApifyProvider::new(
            client.clone(),
            config.apify_api_token.clone(),
            JobBoard::LinkedIn,
            config.linkedin_actor_id.clone(),
            config.job_location.clone(),
            config.job_rows,
        );
        let naukri = ApifyProvider::new(
            client,
            config.apify_api_token.clone(),
            JobBoard::Naukri,
            config.naukri_actor_id.clone(),
            config.job_location.clone(),
            config.job_rows,
        );
        Ok((linkedin, naukri))
    }

    fn endpoint(&self) -> String {
        format!(
            "{APIFY_API_URL}/acts/{}/run-sync-get-dataset-items",
            self.actor_id
        )
    }
}

#[async_trait]
impl JobProvider for ApifyProvider {
    fn name(&self) -> &'static str {
        self.board.name()
    }

    async fn search(&self, keywords: &str) -> Result<Vec<JobListing>, ProviderError> {
        let token = self.token.as_deref().ok_or(ProviderError::MissingToken)?;
        let input = self.board.run_input(keywords, &self.location, self.rows);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("token", token)])
            .json(&input)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let items: Vec<Value> = serde_json::from_str(&body)?;
        debug!(provider = self.name(), "Received {} raw job items", items.len());

        Ok(parse_listings(items, self.name()))
    }
}
