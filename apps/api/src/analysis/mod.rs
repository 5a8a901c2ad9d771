// Resume analysis: summary, skill gaps, roadmap and job keywords.
// All LLM calls go through the `Completion` trait — no direct HTTP here.

pub mod pipeline;
pub mod prompts;
pub mod session;

pub use pipeline::{analyze_resume, extract_keywords, AnalysisStage, ResumeAnalysis};
