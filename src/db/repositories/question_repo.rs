//! Question repository

use sqlx::PgExecutor;

use crate::{
    error::{AppError, AppResult},
    models::Question,
};

/// Partial exemplar for question lookups
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub id: Option<i32>,
    pub number: Option<i32>,
    pub number_in_contest: Option<i32>,
    pub name: Option<String>,
    pub contest_id: Option<i32>,
}

/// Repository for question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Insert a question, overwriting every field if the ID already exists
    pub async fn upsert<'e>(executor: impl PgExecutor<'e>, question: &Question) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (id, number, number_in_contest, name, description, contest_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                number = EXCLUDED.number,
                number_in_contest = EXCLUDED.number_in_contest,
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                contest_id = EXCLUDED.contest_id
            RETURNING *
            "#,
        )
        .bind(question.id)
        .bind(question.number)
        .bind(question.number_in_contest)
        .bind(&question.name)
        .bind(&question.description)
        .bind(question.contest_id)
        .fetch_one(executor)
        .await?;

        Ok(question)
    }

    /// Find question by ID
    pub async fn find_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(r#"SELECT * FROM questions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(question)
    }

    /// Check whether a question with the given ID exists
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)"#)
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// List all questions in insertion order
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(r#"SELECT * FROM questions ORDER BY seq"#)
            .fetch_all(executor)
            .await?;

        Ok(questions)
    }

    /// List questions matching the populated fields of the filter, in insertion order
    pub async fn find_all_by<'e>(
        executor: impl PgExecutor<'e>,
        filter: &QuestionFilter,
    ) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT * FROM questions
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::integer IS NULL OR number = $2)
                AND ($3::integer IS NULL OR number_in_contest = $3)
                AND ($4::text IS NULL OR name = $4)
                AND ($5::integer IS NULL OR contest_id = $5)
            ORDER BY seq
            "#,
        )
        .bind(filter.id)
        .bind(filter.number)
        .bind(filter.number_in_contest)
        .bind(filter.name.as_deref())
        .bind(filter.contest_id)
        .fetch_all(executor)
        .await?;

        Ok(questions)
    }

    /// Find exactly one question matching the filter
    ///
    /// Zero matches is NotFound; more than one is Ambiguous.
    pub async fn find_one<'e>(
        executor: impl PgExecutor<'e>,
        filter: &QuestionFilter,
    ) -> AppResult<Question> {
        let mut questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT * FROM questions
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::integer IS NULL OR number = $2)
                AND ($3::integer IS NULL OR number_in_contest = $3)
                AND ($4::text IS NULL OR name = $4)
                AND ($5::integer IS NULL OR contest_id = $5)
            ORDER BY seq
            LIMIT 2
            "#,
        )
        .bind(filter.id)
        .bind(filter.number)
        .bind(filter.number_in_contest)
        .bind(filter.name.as_deref())
        .bind(filter.contest_id)
        .fetch_all(executor)
        .await?;

        match questions.len() {
            0 => Err(AppError::NotFound("Question not found".to_string())),
            1 => Ok(questions.remove(0)),
            _ => Err(AppError::Ambiguous(
                "More than one question matches".to_string(),
            )),
        }
    }

    /// IDs of a contest's questions, in insertion order
    pub async fn ids_by_contest<'e>(
        executor: impl PgExecutor<'e>,
        contest_id: i32,
    ) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> =
            sqlx::query_scalar(r#"SELECT id FROM questions WHERE contest_id = $1 ORDER BY seq"#)
                .bind(contest_id)
                .fetch_all(executor)
                .await?;

        Ok(ids)
    }
}
