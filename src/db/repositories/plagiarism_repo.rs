//! Plagiarism group repository

use sqlx::{PgConnection, PgExecutor};

use crate::{
    error::{AppError, AppResult},
    models::Plagiarism,
};

/// Partial exemplar for plagiarism group lookups
#[derive(Debug, Clone, Default)]
pub struct PlagiarismFilter {
    pub confidence_percentage: Option<i32>,
    pub language: Option<String>,
    pub detector_run_id: Option<i32>,
}

/// Repository for plagiarism group database operations
pub struct PlagiarismRepository;

impl PlagiarismRepository {
    /// Insert a plagiarism group and its member links with a store-generated ID
    ///
    /// Takes a connection rather than an executor because the group row and
    /// its join rows must land in the same transaction.
    pub async fn insert(
        conn: &mut PgConnection,
        confidence_percentage: i32,
        language: &str,
        detector_run_id: i32,
        submission_ids: &[i32],
    ) -> AppResult<Plagiarism> {
        let plagiarism = sqlx::query_as::<_, Plagiarism>(
            r#"
            INSERT INTO plagiarisms (confidence_percentage, language, detector_run_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(confidence_percentage)
        .bind(language)
        .bind(detector_run_id)
        .fetch_one(&mut *conn)
        .await?;

        for (position, submission_id) in submission_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO plagiarism_submissions (plagiarism_id, submission_id, position)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(plagiarism.id)
            .bind(submission_id)
            .bind(position as i32)
            .execute(&mut *conn)
            .await?;
        }

        Ok(plagiarism)
    }

    /// Find plagiarism group by ID
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: i32,
    ) -> AppResult<Option<Plagiarism>> {
        let plagiarism =
            sqlx::query_as::<_, Plagiarism>(r#"SELECT * FROM plagiarisms WHERE id = $1"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(plagiarism)
    }

    /// List all plagiarism groups in insertion order
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<Plagiarism>> {
        let plagiarisms =
            sqlx::query_as::<_, Plagiarism>(r#"SELECT * FROM plagiarisms ORDER BY id"#)
                .fetch_all(executor)
                .await?;

        Ok(plagiarisms)
    }

    /// List plagiarism groups matching the populated fields of the filter
    pub async fn find_all_by<'e>(
        executor: impl PgExecutor<'e>,
        filter: &PlagiarismFilter,
    ) -> AppResult<Vec<Plagiarism>> {
        let plagiarisms = sqlx::query_as::<_, Plagiarism>(
            r#"
            SELECT * FROM plagiarisms
            WHERE
                ($1::integer IS NULL OR confidence_percentage = $1)
                AND ($2::text IS NULL OR language = $2)
                AND ($3::integer IS NULL OR detector_run_id = $3)
            ORDER BY id
            "#,
        )
        .bind(filter.confidence_percentage)
        .bind(filter.language.as_deref())
        .bind(filter.detector_run_id)
        .fetch_all(executor)
        .await?;

        Ok(plagiarisms)
    }

    /// Find exactly one plagiarism group matching the filter
    ///
    /// Zero matches is NotFound; more than one is Ambiguous.
    pub async fn find_one<'e>(
        executor: impl PgExecutor<'e>,
        filter: &PlagiarismFilter,
    ) -> AppResult<Plagiarism> {
        let mut plagiarisms = sqlx::query_as::<_, Plagiarism>(
            r#"
            SELECT * FROM plagiarisms
            WHERE
                ($1::integer IS NULL OR confidence_percentage = $1)
                AND ($2::text IS NULL OR language = $2)
                AND ($3::integer IS NULL OR detector_run_id = $3)
            ORDER BY id
            LIMIT 2
            "#,
        )
        .bind(filter.confidence_percentage)
        .bind(filter.language.as_deref())
        .bind(filter.detector_run_id)
        .fetch_all(executor)
        .await?;

        match plagiarisms.len() {
            0 => Err(AppError::NotFound("Plagiarism group not found".to_string())),
            1 => Ok(plagiarisms.remove(0)),
            _ => Err(AppError::Ambiguous(
                "More than one plagiarism group matches".to_string(),
            )),
        }
    }

    /// Number of plagiarism groups produced by a detector run
    pub async fn count_by_detector_run<'e>(
        executor: impl PgExecutor<'e>,
        detector_run_id: i32,
    ) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM plagiarisms WHERE detector_run_id = $1"#)
                .bind(detector_run_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Number of member submissions in a plagiarism group
    pub async fn submission_count<'e>(
        executor: impl PgExecutor<'e>,
        plagiarism_id: i32,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM plagiarism_submissions WHERE plagiarism_id = $1"#,
        )
        .bind(plagiarism_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}
