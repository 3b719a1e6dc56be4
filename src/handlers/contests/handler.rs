//! Contest handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::AppForm,
    services::ContestService,
    state::AppState,
};

use super::{request::CreateContestRequest, response::ContestResponse};

/// List all contests
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_contests(state.db()).await?;
    Ok(Json(contests))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.db(), id).await?;
    Ok(Json(contest))
}

/// Create a new contest from form-encoded fields
pub async fn create_contest(
    State(state): State<AppState>,
    AppForm(payload): AppForm<CreateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.db(), payload).await?;
    Ok(Json(contest))
}
