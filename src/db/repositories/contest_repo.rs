//! Contest repository

use sqlx::PgExecutor;

use crate::{
    error::{AppError, AppResult},
    models::Contest,
};

/// Partial exemplar for contest lookups
///
/// Populated fields are matched by equality; `None` fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct ContestFilter {
    pub id: Option<i32>,
    pub slug: Option<String>,
}

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Insert a contest, overwriting the slug if the ID already exists
    pub async fn upsert<'e>(executor: impl PgExecutor<'e>, id: i32, slug: &str) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (id, slug)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET slug = EXCLUDED.slug
            RETURNING id, slug
            "#,
        )
        .bind(id)
        .bind(slug)
        .fetch_one(executor)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT id, slug FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(contest)
    }

    /// List all contests in insertion order
    pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<Contest>> {
        let contests =
            sqlx::query_as::<_, Contest>(r#"SELECT id, slug FROM contests ORDER BY seq"#)
                .fetch_all(executor)
                .await?;

        Ok(contests)
    }

    /// List contests matching the populated fields of the filter, in insertion order
    pub async fn find_all_by<'e>(
        executor: impl PgExecutor<'e>,
        filter: &ContestFilter,
    ) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, slug FROM contests
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::text IS NULL OR slug = $2)
            ORDER BY seq
            "#,
        )
        .bind(filter.id)
        .bind(filter.slug.as_deref())
        .fetch_all(executor)
        .await?;

        Ok(contests)
    }

    /// Find exactly one contest matching the filter
    ///
    /// Zero matches is NotFound; more than one is Ambiguous.
    pub async fn find_one<'e>(
        executor: impl PgExecutor<'e>,
        filter: &ContestFilter,
    ) -> AppResult<Contest> {
        let mut contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, slug FROM contests
            WHERE
                ($1::integer IS NULL OR id = $1)
                AND ($2::text IS NULL OR slug = $2)
            ORDER BY seq
            LIMIT 2
            "#,
        )
        .bind(filter.id)
        .bind(filter.slug.as_deref())
        .fetch_all(executor)
        .await?;

        match contests.len() {
            0 => Err(AppError::NotFound("Contest not found".to_string())),
            1 => Ok(contests.remove(0)),
            _ => Err(AppError::Ambiguous(
                "More than one contest matches".to_string(),
            )),
        }
    }
}
