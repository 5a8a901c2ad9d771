//! JSON API mirroring the browser flow.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::session::SessionStage;
use crate::analysis::ResumeAnalysis;
use crate::errors::AppError;
use crate::jobs::JobSearchResults;
use crate::state::AppState;
use crate::workflow::{analyze_upload, read_resume_upload, recommend_jobs};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: ResumeAnalysis,
    pub resume_chars: usize,
    pub stage: SessionStage,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub keywords: String,
    #[serde(flatten)]
    pub jobs: JobSearchResults,
    pub stage: SessionStage,
}

/// POST /api/v1/analyze
///
/// Multipart upload with a `resume` PDF field. Returns summary, skill gaps and roadmap.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let data = read_resume_upload(&mut multipart).await?;
    let mut outcome = analyze_upload(&state, data).await?;
    outcome.session.advance(SessionStage::AnalysisDisplayed)?;

    Ok(Json(AnalyzeResponse {
        analysis: outcome.analysis,
        resume_chars: outcome.resume_chars,
        stage: outcome.session.stage(),
    }))
}

/// POST /api/v1/recommendations
///
/// Derives search keywords from a summary and returns listings per provider.
/// A provider that fails contributes an empty list.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let mut outcome = recommend_jobs(&state, &request.summary).await?;
    outcome.session.advance(SessionStage::JobsDisplayed)?;

    Ok(Json(RecommendationResponse {
        keywords: outcome.keywords,
        jobs: outcome.jobs,
        stage: outcome.session.stage(),
    }))
}
