//! Question handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::AppJson,
    services::QuestionService,
    state::AppState,
};

use super::{
    request::{QuestionRequest, QuestionsByContestQuery},
    response::QuestionResponse,
};

/// List all questions
pub async fn list_questions(State(state): State<AppState>) -> AppResult<Json<Vec<QuestionResponse>>> {
    let questions = QuestionService::list_questions(state.db()).await?;
    Ok(Json(questions))
}

/// Get a specific question
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<QuestionResponse>> {
    let question = QuestionService::get_question(state.db(), id).await?;
    Ok(Json(question))
}

/// List the questions of the contest with the given slug
pub async fn questions_by_contest(
    State(state): State<AppState>,
    Query(query): Query<QuestionsByContestQuery>,
) -> AppResult<Json<Vec<QuestionResponse>>> {
    let questions =
        QuestionService::questions_by_contest_slug(state.db(), &query.contest_slug).await?;
    Ok(Json(questions))
}

/// Create a new question, resolving its contest by slug
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuestionRequest>,
) -> AppResult<StatusCode> {
    payload.validate()?;

    QuestionService::create_question(state.db(), payload).await?;
    Ok(StatusCode::OK)
}

/// Edit the question with the given name
pub async fn edit_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuestionRequest>,
) -> AppResult<StatusCode> {
    payload.validate()?;

    QuestionService::edit_question(state.db(), payload).await?;
    Ok(StatusCode::OK)
}
