//! Submission handler implementations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::AppJson,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{ListSubmissionsQuery, SubmissionRequest},
    response::SubmissionResponse,
};

/// List submissions, optionally restricted to one question
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<Vec<SubmissionResponse>>> {
    let submissions = SubmissionService::list_submissions(state.db(), query.question_id).await?;
    Ok(Json(submissions))
}

/// Ingest a batch of submissions
pub async fn create_submissions(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Vec<SubmissionRequest>>,
) -> AppResult<StatusCode> {
    for dto in &payload {
        dto.validate()?;
    }

    SubmissionService::create_submissions(state.db(), payload).await?;
    Ok(StatusCode::OK)
}
