//! Detector run handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::AppJson,
    services::DetectorRunService,
    state::AppState,
};

use super::{
    request::{CreateDetectorRunRequest, DetectorRunsByQuestionQuery},
    response::DetectorRunResponse,
};

/// List the detector runs launched against the question with the given name
pub async fn runs_by_question(
    State(state): State<AppState>,
    Query(query): Query<DetectorRunsByQuestionQuery>,
) -> AppResult<Json<Vec<DetectorRunResponse>>> {
    let runs = DetectorRunService::runs_by_question_name(state.db(), &query.question_name).await?;
    Ok(Json(runs))
}

/// List all detector runs
pub async fn list_runs(State(state): State<AppState>) -> AppResult<Json<Vec<DetectorRunResponse>>> {
    let runs = DetectorRunService::list_runs(state.db()).await?;
    Ok(Json(runs))
}

/// Get a specific detector run
pub async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DetectorRunResponse>> {
    let run = DetectorRunService::get_run(state.db(), id).await?;
    Ok(Json(run))
}

/// Record a detector invocation
pub async fn create_run(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDetectorRunRequest>,
) -> AppResult<Json<DetectorRunResponse>> {
    payload.validate()?;

    let run = DetectorRunService::create_run(state.db(), payload).await?;
    Ok(Json(run))
}
