//! Submission repository

use sqlx::PgExecutor;

use crate::{
    error::{AppError, AppResult},
    models::Submission,
};

/// Partial exemplar for submission lookups
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub id: Option<i32>,
    pub language: Option<String>,
    pub user_slug: Option<String>,
    pub question_id: Option<i32>,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Insert a submission, overwriting every field if the ID already exists
    ///
    /// The original insertion position is kept on overwrite, so re-ingesting
    /// a page of submissions does not reorder reads.
    pub async fn upsert<'e>(
        executor: impl PgExecutor<'e>,
        submission: &Submission,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (id, code, language, date, user_slug, page, question_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                code = EXCLUDED.code,
                language = EXCLUDED.language,
                date = EXCLUDED.date,
                user_slug = EXCLUDED.user_slug,
                page = EXCLUDED.page,
                question_id = EXCLUDED.question_id
            RETURNING *
            "#,
        )
        .bind(submission.id)
        .bind(&submission.code)
        .bind(&submission.language)
        .bind(submission.date)
        .bind(&submission.user_slug)
        .bind(submission.page)
        .bind(submission.question_id)
        .fetch_one(executor)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: i32,
    ) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(submission)
    }

    /// Check whether a submission with the given ID exists
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM submissions WHERE id = $1)"#)
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// List all submissions in insertion order
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<Submission>> {
        let submissions =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions ORDER BY seq"#)
                .fetch_all(executor)
                .await?;

        Ok(submissions)
    }

    /// List submissions matching the populated fields of the filter, in insertion order
    pub async fn find_all_by<'e>(
        executor: impl PgExecutor<'e>,
        filter: &SubmissionFilter,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::text IS NULL OR language = $2)
                AND ($3::text IS NULL OR user_slug = $3)
                AND ($4::integer IS NULL OR question_id = $4)
            ORDER BY seq
            "#,
        )
        .bind(filter.id)
        .bind(filter.language.as_deref())
        .bind(filter.user_slug.as_deref())
        .bind(filter.question_id)
        .fetch_all(executor)
        .await?;

        Ok(submissions)
    }

    /// Find exactly one submission matching the filter
    ///
    /// Zero matches is NotFound; more than one is Ambiguous.
    pub async fn find_one<'e>(
        executor: impl PgExecutor<'e>,
        filter: &SubmissionFilter,
    ) -> AppResult<Submission> {
        let mut submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::text IS NULL OR language = $2)
                AND ($3::text IS NULL OR user_slug = $3)
                AND ($4::integer IS NULL OR question_id = $4)
            ORDER BY seq
            LIMIT 2
            "#,
        )
        .bind(filter.id)
        .bind(filter.language.as_deref())
        .bind(filter.user_slug.as_deref())
        .bind(filter.question_id)
        .fetch_all(executor)
        .await?;

        match submissions.len() {
            0 => Err(AppError::NotFound("Submission not found".to_string())),
            1 => Ok(submissions.remove(0)),
            _ => Err(AppError::Ambiguous(
                "More than one submission matches".to_string(),
            )),
        }
    }

    /// Member submissions of a plagiarism group, in the order the detector reported them
    pub async fn find_by_plagiarism<'e>(
        executor: impl PgExecutor<'e>,
        plagiarism_id: i32,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT s.* FROM submissions s
            JOIN plagiarism_submissions ps ON ps.submission_id = s.id
            WHERE ps.plagiarism_id = $1
            ORDER BY ps.position
            "#,
        )
        .bind(plagiarism_id)
        .fetch_all(executor)
        .await?;

        Ok(submissions)
    }
}
