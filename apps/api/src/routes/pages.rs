//! Browser-facing routes. Errors render as an HTML page with the upload form.

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::analysis::session::SessionStage;
use crate::errors::AppError;
use crate::render::{render_analysis_page, render_error_page, render_index_page, render_jobs_page};
use crate::state::AppState;
use crate::workflow::{analyze_upload, read_resume_upload, recommend_jobs};

/// An `AppError` rendered as HTML instead of the JSON envelope.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let (_, message) = self.0.code_and_message();
        (status, Html(render_error_page(&message))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationForm {
    pub summary: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_index_page())
}

/// POST /analyze
pub async fn handle_analyze_page(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let data = read_resume_upload(&mut multipart).await?;
    let mut outcome = analyze_upload(&state, data).await?;

    let page = render_analysis_page(&outcome.analysis);
    outcome
        .session
        .advance(SessionStage::AnalysisDisplayed)
        .map_err(AppError::from)?;
    Ok(Html(page))
}

/// POST /recommendations
pub async fn handle_recommendations_page(
    State(state): State<AppState>,
    Form(form): Form<RecommendationForm>,
) -> Result<Html<String>, PageError> {
    let mut outcome = recommend_jobs(&state, &form.summary).await?;

    let page = render_jobs_page(&outcome.keywords, &outcome.jobs);
    outcome
        .session
        .advance(SessionStage::JobsDisplayed)
        .map_err(AppError::from)?;
    Ok(Html(page))
}
