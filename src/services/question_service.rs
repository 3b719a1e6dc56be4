//! Question service

use sqlx::PgPool;

use crate::{
    db::repositories::{
        ContestFilter, ContestRepository, DetectorRunRepository, QuestionFilter,
        QuestionRepository,
    },
    error::{AppError, AppResult},
    handlers::questions::{request::QuestionRequest, response::QuestionResponse},
    models::{Contest, Question},
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// List all questions in insertion order
    pub async fn list_questions(pool: &PgPool) -> AppResult<Vec<QuestionResponse>> {
        let questions = QuestionRepository::find_all(pool).await?;

        futures::future::try_join_all(
            questions.into_iter().map(|q| Self::to_response(pool, q)),
        )
        .await
    }

    /// Get question by ID
    pub async fn get_question(pool: &PgPool, id: i32) -> AppResult<QuestionResponse> {
        let question = QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        Self::to_response(pool, question).await
    }

    /// List the questions of the contest with the given slug
    pub async fn questions_by_contest_slug(
        pool: &PgPool,
        contest_slug: &str,
    ) -> AppResult<Vec<QuestionResponse>> {
        let contest = ContestRepository::find_one(
            pool,
            &ContestFilter {
                slug: Some(contest_slug.to_string()),
                ..Default::default()
            },
        )
        .await?;

        let questions = QuestionRepository::find_all_by(
            pool,
            &QuestionFilter {
                contest_id: Some(contest.id),
                ..Default::default()
            },
        )
        .await?;

        futures::future::try_join_all(
            questions.into_iter().map(|q| Self::to_response(pool, q)),
        )
        .await
    }

    /// Create a question, resolving its contest by slug
    ///
    /// Question IDs come from the source site, so the payload must carry one;
    /// re-posting an ID overwrites the stored record.
    pub async fn create_question(pool: &PgPool, payload: QuestionRequest) -> AppResult<()> {
        let id = payload
            .id
            .ok_or_else(|| AppError::BadRequest("Question id is required".to_string()))?;

        let mut tx = pool.begin().await?;

        let contest = Self::resolve_contest(&mut tx, &payload.contest_slug).await?;

        let question = Question {
            id,
            number: payload.number,
            number_in_contest: payload.number_in_contest,
            name: payload.name,
            description: payload.description,
            contest_id: contest.id,
        };
        QuestionRepository::upsert(&mut *tx, &question).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Edit the question with the payload's name, keeping its ID
    pub async fn edit_question(pool: &PgPool, payload: QuestionRequest) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        let mut question = QuestionRepository::find_one(
            &mut *tx,
            &QuestionFilter {
                name: Some(payload.name.clone()),
                ..Default::default()
            },
        )
        .await?;

        if let Some(number) = payload.number {
            question.number = Some(number);
        }
        question.number_in_contest = payload.number_in_contest;
        question.description = payload.description;

        let contest = Self::resolve_contest(&mut tx, &payload.contest_slug).await?;
        question.contest_id = contest.id;

        QuestionRepository::upsert(&mut *tx, &question).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Resolve a contest slug carried by an inbound payload
    ///
    /// An unknown slug is the caller's fault, so NotFound becomes BadRequest;
    /// an ambiguous slug stays Ambiguous.
    async fn resolve_contest(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        contest_slug: &str,
    ) -> AppResult<Contest> {
        ContestRepository::find_one(
            &mut **tx,
            &ContestFilter {
                slug: Some(contest_slug.to_string()),
                ..Default::default()
            },
        )
        .await
        .map_err(|err| match err {
            AppError::NotFound(_) => {
                AppError::BadRequest(format!("Unknown contest slug: {contest_slug}"))
            }
            other => other,
        })
    }

    /// Attach the `contestId` and `detectorRunIds` projections
    async fn to_response(pool: &PgPool, question: Question) -> AppResult<QuestionResponse> {
        let detector_run_ids = DetectorRunRepository::ids_by_question(pool, question.id).await?;

        Ok(QuestionResponse {
            id: question.id,
            number: question.number,
            number_in_contest: question.number_in_contest,
            name: question.name,
            description: question.description,
            contest_id: question.contest_id,
            detector_run_ids,
        })
    }
}
