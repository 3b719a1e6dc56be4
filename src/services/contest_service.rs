//! Contest service

use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, QuestionRepository},
    error::{AppError, AppResult},
    handlers::contests::{request::CreateContestRequest, response::ContestResponse},
    models::Contest,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a contest, overwriting the slug if the ID was already ingested
    pub async fn create_contest(
        pool: &PgPool,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        let contest = ContestRepository::upsert(pool, payload.id, &payload.slug).await?;

        Self::to_response(pool, contest).await
    }

    /// Get contest by ID
    pub async fn get_contest(pool: &PgPool, id: i32) -> AppResult<ContestResponse> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Self::to_response(pool, contest).await
    }

    /// List all contests in insertion order
    pub async fn list_contests(pool: &PgPool) -> AppResult<Vec<ContestResponse>> {
        let contests = ContestRepository::find_all(pool).await?;

        futures::future::try_join_all(
            contests.into_iter().map(|c| Self::to_response(pool, c)),
        )
        .await
    }

    /// Attach the `questionIds` projection
    async fn to_response(pool: &PgPool, contest: Contest) -> AppResult<ContestResponse> {
        let question_ids = QuestionRepository::ids_by_contest(pool, contest.id).await?;

        Ok(ContestResponse {
            id: contest.id,
            slug: contest.slug,
            question_ids,
        })
    }
}
