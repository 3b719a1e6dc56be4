//! Detector run repository

use sqlx::PgExecutor;

use crate::{
    error::{AppError, AppResult},
    models::DetectorRun,
};

/// Partial exemplar for detector run lookups
#[derive(Debug, Clone, Default)]
pub struct DetectorRunFilter {
    pub detector: Option<String>,
    pub question_id: Option<i32>,
    pub reference_submission_id: Option<i32>,
}

/// Repository for detector run database operations
pub struct DetectorRunRepository;

impl DetectorRunRepository {
    /// Insert a detector run with a store-generated ID
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        detector: &str,
        parameters: &str,
        question_id: i32,
        reference_submission_id: Option<i32>,
    ) -> AppResult<DetectorRun> {
        let run = sqlx::query_as::<_, DetectorRun>(
            r#"
            INSERT INTO detector_runs (detector, parameters, question_id, reference_submission_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(detector)
        .bind(parameters)
        .bind(question_id)
        .bind(reference_submission_id)
        .fetch_one(executor)
        .await?;

        Ok(run)
    }

    /// Find detector run by ID
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: i32,
    ) -> AppResult<Option<DetectorRun>> {
        let run = sqlx::query_as::<_, DetectorRun>(r#"SELECT * FROM detector_runs WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(run)
    }

    /// Check whether a detector run with the given ID exists
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM detector_runs WHERE id = $1)"#)
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// List all detector runs in insertion order
    ///
    /// IDs are store-generated, so they double as the insertion order.
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<DetectorRun>> {
        let runs = sqlx::query_as::<_, DetectorRun>(r#"SELECT * FROM detector_runs ORDER BY id"#)
            .fetch_all(executor)
            .await?;

        Ok(runs)
    }

    /// List detector runs matching the populated fields of the filter
    pub async fn find_all_by<'e>(
        executor: impl PgExecutor<'e>,
        filter: &DetectorRunFilter,
    ) -> AppResult<Vec<DetectorRun>> {
        let runs = sqlx::query_as::<_, DetectorRun>(
            r#"
            SELECT * FROM detector_runs
            WHERE
                ($1::text IS NULL OR detector = $1)
                AND ($2::integer IS NULL OR question_id = $2)
                AND ($3::integer IS NULL OR reference_submission_id = $3)
            ORDER BY id
            "#,
        )
        .bind(filter.detector.as_deref())
        .bind(filter.question_id)
        .bind(filter.reference_submission_id)
        .fetch_all(executor)
        .await?;

        Ok(runs)
    }

    /// Find exactly one detector run matching the filter
    ///
    /// Zero matches is NotFound; more than one is Ambiguous.
    pub async fn find_one<'e>(
        executor: impl PgExecutor<'e>,
        filter: &DetectorRunFilter,
    ) -> AppResult<DetectorRun> {
        let mut runs = sqlx::query_as::<_, DetectorRun>(
            r#"
            SELECT * FROM detector_runs
            WHERE
                ($1::text IS NULL OR detector = $1)
                AND ($2::integer IS NULL OR question_id = $2)
                AND ($3::integer IS NULL OR reference_submission_id = $3)
            ORDER BY id
            LIMIT 2
            "#,
        )
        .bind(filter.detector.as_deref())
        .bind(filter.question_id)
        .bind(filter.reference_submission_id)
        .fetch_all(executor)
        .await?;

        match runs.len() {
            0 => Err(AppError::NotFound("Detector run not found".to_string())),
            1 => Ok(runs.remove(0)),
            _ => Err(AppError::Ambiguous(
                "More than one detector run matches".to_string(),
            )),
        }
    }

    /// IDs of a question's detector runs, in insertion order
    pub async fn ids_by_question<'e>(
        executor: impl PgExecutor<'e>,
        question_id: i32,
    ) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> =
            sqlx::query_scalar(r#"SELECT id FROM detector_runs WHERE question_id = $1 ORDER BY id"#)
                .bind(question_id)
                .fetch_all(executor)
                .await?;

        Ok(ids)
    }
}
