//! Test doubles for the inference API and the job providers.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::jobs::{JobListing, JobProvider, ProviderError};
use crate::llm_client::{Completion, LlmError};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_tokens: u32,
}

enum Behaviour {
    Scripted(VecDeque<String>),
    Echo,
    FailAfter(usize, String),
    Unconfigured,
}

/// Records every prompt and answers according to its behaviour.
pub struct StubCompletion {
    behaviour: Mutex<Behaviour>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubCompletion {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour: Mutex::new(behaviour),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers with each response in turn.
    pub fn with_responses(responses: &[&str]) -> Self {
        Self::new(Behaviour::Scripted(
            responses.iter().map(|r| r.to_string()).collect(),
        ))
    }

    /// Answers with the prompt it was given.
    pub fn echo() -> Self {
        Self::new(Behaviour::Echo)
    }

    /// Answers `ok` for the first `n` calls, then fails like a rejected request.
    pub fn failing_after(n: usize, ok: &str) -> Self {
        Self::new(Behaviour::FailAfter(n, ok.to_string()))
    }

    pub fn unconfigured() -> Self {
        Self::new(Behaviour::Unconfigured)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completion for StubCompletion {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                max_tokens,
            });
            calls.len() - 1
        };

        let mut behaviour = self.behaviour.lock().unwrap();
        match &mut *behaviour {
            Behaviour::Scripted(responses) => responses.pop_front().ok_or(LlmError::EmptyContent),
            Behaviour::Echo => Ok(prompt.to_string()),
            Behaviour::FailAfter(n, ok) if call_index < *n => Ok(ok.clone()),
            Behaviour::FailAfter(_, _) => Err(LlmError::Api {
                status: 401,
                message: "Invalid API Key".to_string(),
            }),
            Behaviour::Unconfigured => Err(LlmError::MissingApiKey),
        }
    }
}

/// A provider that returns fixed listings (or a fixed failure) and records
/// the keywords it was queried with.
pub struct StubProvider {
    name: &'static str,
    result: Result<Vec<JobListing>, String>,
    queries: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn returning(name: &'static str, listings: Vec<JobListing>) -> Self {
        Self {
            name,
            result: Ok(listings),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &'static str, message: &str) -> Self {
        Self {
            name,
            result: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobProvider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, keywords: &str) -> Result<Vec<JobListing>, ProviderError> {
        self.queries.lock().unwrap().push(keywords.to_string());
        self.result.clone().map_err(|message| ProviderError::Api {
            status: 502,
            message,
        })
    }
}

pub fn listing(title: &str, company: &str, location: Option<&str>, link: &str) -> JobListing {
    JobListing {
        title: Some(title.to_string()),
        company_name: Some(company.to_string()),
        location: location.map(str::to_string),
        link: Some(link.to_string()),
        url: None,
    }
}

/// Returns the markup of the `<section id="...">` element of a rendered page.
pub fn section_html<'a>(page: &'a str, id: &str) -> &'a str {
    let start = page
        .find(&format!("<section id=\"{id}\">"))
        .unwrap_or_else(|| panic!("section {id} missing"));
    let end = start + page[start..].find("</section>").unwrap();
    &page[start..end]
}
