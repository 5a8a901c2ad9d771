//! Per-session progress tracking.
//!
//! A session only ever moves forward one stage at a time. Uploading a new
//! document starts a fresh session from `Idle`.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SessionStage {
    Idle,
    DocumentUploaded,
    TextExtracted,
    /// Summary, skill gaps and roadmap have all been returned.
    /// Nothing is shown before the whole analysis is ready.
    Summarized,
    AnalysisDisplayed,
    JobsFetched,
    JobsDisplayed,
}

impl SessionStage {
    pub fn next(self) -> Option<SessionStage> {
        use SessionStage::*;
        match self {
            Idle => Some(DocumentUploaded),
            DocumentUploaded => Some(TextExtracted),
            TextExtracted => Some(Summarized),
            Summarized => Some(AnalysisDisplayed),
            AnalysisDisplayed => Some(JobsFetched),
            JobsFetched => Some(JobsDisplayed),
            JobsDisplayed => None,
        }
    }

    /// Progress line logged when the session enters this stage.
    pub fn progress_message(self) -> &'static str {
        use SessionStage::*;
        match self {
            Idle => "Waiting for a resume upload",
            DocumentUploaded => "Resume received",
            TextExtracted => "Text extracted from resume",
            Summarized => "Resume analysis complete",
            AnalysisDisplayed => "Analysis completed successfully",
            JobsFetched => "Job listings fetched",
            JobsDisplayed => "Job recommendations ready",
        }
    }
}

#[derive(Debug, Error)]
#[error("session cannot move from {from:?} to {to:?}")]
pub struct StageError {
    pub from: SessionStage,
    pub to: SessionStage,
}

#[derive(Debug, Clone)]
pub struct Session {
    stage: SessionStage,
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: SessionStage::Idle,
        }
    }

    /// Picks a session back up after the analysis page was shown.
    /// The recommendation form is the only way back in, so this is where it lands.
    pub fn from_displayed_analysis() -> Self {
        Self {
            stage: SessionStage::AnalysisDisplayed,
        }
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn advance(&mut self, to: SessionStage) -> Result<(), StageError> {
        if self.stage.next() != Some(to) {
            return Err(StageError {
                from: self.stage,
                to,
            });
        }
        self.stage = to;
        info!(stage = ?to, "{}", to.progress_message());
        Ok(())
    }
}
