use anyhow::{Context, Result};

const DEFAULT_LINKEDIN_ACTOR: &str = "BHzefUZlZRKWxkTck";
const DEFAULT_NAUKRI_ACTOR: &str = "alpcnRV9YI9lYVPWk";

/// Application configuration loaded from environment variables.
///
/// Credentials are optional here: a missing `GROQ_API_KEY` only fails the
/// first request that needs the model, and a missing `APIFY_API_TOKEN`
/// degrades job search to empty results.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub groq_api_key: Option<String>,
    pub apify_api_token: Option<String>,
    pub job_location: String,
    pub job_rows: u32,
    pub linkedin_actor_id: String,
    pub naukri_actor_id: String,
    /// Issue the summary, gap and roadmap calls concurrently.
    pub analysis_concurrent: bool,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            groq_api_key: var("GROQ_API_KEY"),
            apify_api_token: var("APIFY_API_TOKEN"),
            job_location: var("JOB_LOCATION").unwrap_or_else(|| "india".to_string()),
            job_rows: var("JOB_ROWS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u32>()
                .context("JOB_ROWS must be a non-negative integer")?,
            linkedin_actor_id: var("LINKEDIN_ACTOR_ID")
                .unwrap_or_else(|| DEFAULT_LINKEDIN_ACTOR.to_string()),
            naukri_actor_id: var("NAUKRI_ACTOR_ID")
                .unwrap_or_else(|| DEFAULT_NAUKRI_ACTOR.to_string()),
            analysis_concurrent: parse_bool(var("ANALYSIS_CONCURRENT").as_deref())
                .context("ANALYSIS_CONCURRENT must be true or false")?,
            max_upload_bytes: var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|| "10485760".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn parse_bool(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("unrecognised boolean '{other}'"),
    }
}
