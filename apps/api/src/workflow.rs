//! The two user interactions, shared by the HTML and JSON routes.
//!
//! Upload: receive file → extract text → summary / gaps / roadmap.
//! Recommend: keywords from summary → job search on both providers.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::analysis::session::{Session, SessionStage};
use crate::analysis::{analyze_resume, extract_keywords, ResumeAnalysis};
use crate::errors::AppError;
use crate::jobs::JobSearchResults;
use crate::resume::extract_text;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

pub struct AnalysisOutcome {
    pub analysis: ResumeAnalysis,
    pub resume_chars: usize,
    pub session: Session,
}

pub struct RecommendationOutcome {
    pub keywords: String,
    pub jobs: JobSearchResults,
    pub session: Session,
}

/// Pulls the `resume` file out of a multipart upload.
pub async fn read_resume_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        debug!(
            file_name = field.file_name().unwrap_or_default(),
            content_type = field.content_type().unwrap_or_default(),
            "Received resume upload"
        );
        // An empty file is left to the ingestor, which rejects it as not a PDF.
        return Ok(field.bytes().await?);
    }

    Err(AppError::Validation(format!(
        "Missing '{RESUME_FIELD}' file field"
    )))
}

/// Runs the upload interaction up to (not including) display.
pub async fn analyze_upload(state: &AppState, data: Bytes) -> Result<AnalysisOutcome, AppError> {
    let mut session = Session::new();
    session.advance(SessionStage::DocumentUploaded)?;

    info!("Extracting text from your resume...");
    let resume_text = extract_text(data).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No extractable text was found in the uploaded PDF".to_string(),
        ));
    }
    session.advance(SessionStage::TextExtracted)?;

    let analysis = analyze_resume(
        state.llm.as_ref(),
        &resume_text,
        state.config.analysis_concurrent,
    )
    .await?;
    // Entered once all three sections are back, not after the summary alone.
    session.advance(SessionStage::Summarized)?;

    Ok(AnalysisOutcome {
        analysis,
        resume_chars: resume_text.chars().count(),
        session,
    })
}

/// Runs the "get recommendations" interaction up to (not including) display.
pub async fn recommend_jobs(
    state: &AppState,
    summary: &str,
) -> Result<RecommendationOutcome, AppError> {
    if summary.trim().is_empty() {
        return Err(AppError::Validation("summary cannot be empty".to_string()));
    }
    let mut session = Session::from_displayed_analysis();

    let keywords = extract_keywords(state.llm.as_ref(), summary).await?;
    info!("Extracted Job Keywords: {keywords}");

    let jobs = state.jobs.search(&keywords).await;
    session.advance(SessionStage::JobsFetched)?;

    Ok(RecommendationOutcome {
        keywords,
        jobs,
        session,
    })
}
