//! Plagiarism group handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::AppJson,
    services::PlagiarismService,
    state::AppState,
};

use super::{
    request::{CreatePlagiarismRequest, PlagiarismsMetadataQuery},
    response::{PlagiarismMetadataResponse, PlagiarismResponse},
};

/// List metadata for the plagiarism groups one detector run produced
pub async fn metadata_by_detector_run(
    State(state): State<AppState>,
    Query(query): Query<PlagiarismsMetadataQuery>,
) -> AppResult<Json<Vec<PlagiarismMetadataResponse>>> {
    let metadata =
        PlagiarismService::metadata_by_detector_run(state.db(), query.detector_run_id).await?;
    Ok(Json(metadata))
}

/// Get a plagiarism group with its member submissions
pub async fn get_plagiarism(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PlagiarismResponse>> {
    let plagiarism = PlagiarismService::get_plagiarism(state.db(), id).await?;
    Ok(Json(plagiarism))
}

/// Persist a batch of plagiarism groups
pub async fn create_plagiarisms(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Vec<CreatePlagiarismRequest>>,
) -> AppResult<StatusCode> {
    for dto in &payload {
        dto.validate()?;
    }

    PlagiarismService::create_plagiarisms(state.db(), payload).await?;
    Ok(StatusCode::OK)
}
