//! Resume analysis stages.
//!
//! Flow: summary → skill gaps → roadmap (the analysis page), then on request
//!       keywords from the summary (the recommendation page).
//!
//! The three analysis stages only read the resume text, so they may run
//! concurrently; the result is identical either way.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::prompts::{
    KEYWORDS_PROMPT_TEMPLATE, RESUME_PLACEHOLDER, ROADMAP_PROMPT_TEMPLATE,
    SKILL_GAPS_PROMPT_TEMPLATE, SUMMARY_PLACEHOLDER, SUMMARY_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::Completion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Summary,
    SkillGaps,
    Roadmap,
    Keywords,
}

impl AnalysisStage {
    fn template(self) -> &'static str {
        match self {
            AnalysisStage::Summary => SUMMARY_PROMPT_TEMPLATE,
            AnalysisStage::SkillGaps => SKILL_GAPS_PROMPT_TEMPLATE,
            AnalysisStage::Roadmap => ROADMAP_PROMPT_TEMPLATE,
            AnalysisStage::Keywords => KEYWORDS_PROMPT_TEMPLATE,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            AnalysisStage::Keywords => SUMMARY_PLACEHOLDER,
            _ => RESUME_PLACEHOLDER,
        }
    }

    /// Output cap sent with the request. Advisory: the model may stop short.
    pub fn max_tokens(self) -> u32 {
        match self {
            AnalysisStage::Summary => 500,
            AnalysisStage::SkillGaps | AnalysisStage::Roadmap => 400,
            AnalysisStage::Keywords => 100,
        }
    }

    pub fn progress_message(self) -> &'static str {
        match self {
            AnalysisStage::Summary => "Summarizing your resume...",
            AnalysisStage::SkillGaps => "Finding skill gaps...",
            AnalysisStage::Roadmap => "Creating future roadmap...",
            AnalysisStage::Keywords => "Extracting job keywords...",
        }
    }

    /// Fills the stage template with its single input.
    pub fn prompt(self, input: &str) -> String {
        self.template().replace(self.placeholder(), input)
    }
}

/// The three sections shown on the analysis page, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    pub summary: String,
    pub skill_gaps: String,
    pub roadmap: String,
}

async fn run_stage(
    llm: &dyn Completion,
    stage: AnalysisStage,
    input: &str,
) -> Result<String, AppError> {
    info!("{}", stage.progress_message());
    let prompt = stage.prompt(input);
    Ok(llm.complete(&prompt, stage.max_tokens()).await?)
}

/// Runs the summary, skill-gap and roadmap stages against the resume text.
/// The first failing stage aborts the whole analysis.
pub async fn analyze_resume(
    llm: &dyn Completion,
    resume_text: &str,
    concurrent: bool,
) -> Result<ResumeAnalysis, AppError> {
    if concurrent {
        let (summary, skill_gaps, roadmap) = tokio::try_join!(
            run_stage(llm, AnalysisStage::Summary, resume_text),
            run_stage(llm, AnalysisStage::SkillGaps, resume_text),
            run_stage(llm, AnalysisStage::Roadmap, resume_text),
        )?;
        return Ok(ResumeAnalysis {
            summary,
            skill_gaps,
            roadmap,
        });
    }

    let summary = run_stage(llm, AnalysisStage::Summary, resume_text).await?;
    let skill_gaps = run_stage(llm, AnalysisStage::SkillGaps, resume_text).await?;
    let roadmap = run_stage(llm, AnalysisStage::Roadmap, resume_text).await?;

    Ok(ResumeAnalysis {
        summary,
        skill_gaps,
        roadmap,
    })
}

/// Asks the model for search keywords derived from the summary and returns
/// them ready for the job providers.
pub async fn extract_keywords(llm: &dyn Completion, summary: &str) -> Result<String, AppError> {
    let raw = run_stage(llm, AnalysisStage::Keywords, summary).await?;
    Ok(clean_keywords(&raw))
}

/// Drops line breaks and surrounding whitespace. Nothing else is rewritten.
pub fn clean_keywords(raw: &str) -> String {
    raw.replace(['\r', '\n'], "").trim().to_string()
}
