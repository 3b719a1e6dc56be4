//! Submission service

use sqlx::PgPool;

use crate::{
    db::repositories::{QuestionRepository, SubmissionFilter, SubmissionRepository},
    error::{AppError, AppResult},
    handlers::submissions::{request::SubmissionRequest, response::SubmissionResponse},
    models::Submission,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// List submissions in insertion order, optionally restricted to one question
    pub async fn list_submissions(
        pool: &PgPool,
        question_id: Option<i32>,
    ) -> AppResult<Vec<SubmissionResponse>> {
        let submissions = match question_id {
            Some(question_id) => {
                if !QuestionRepository::exists(pool, question_id).await? {
                    return Err(AppError::NotFound("Question not found".to_string()));
                }

                SubmissionRepository::find_all_by(
                    pool,
                    &SubmissionFilter {
                        question_id: Some(question_id),
                        ..Default::default()
                    },
                )
                .await?
            }
            None => SubmissionRepository::find_all(pool).await?,
        };

        Ok(submissions.into_iter().map(Into::into).collect())
    }

    /// Ingest a batch of submissions, all-or-nothing
    ///
    /// Caller-provided IDs are respected; re-posting an ID overwrites the
    /// stored record.
    pub async fn create_submissions(
        pool: &PgPool,
        payload: Vec<SubmissionRequest>,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        for dto in payload {
            if !QuestionRepository::exists(&mut *tx, dto.question_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Unknown question id: {}",
                    dto.question_id
                )));
            }

            let submission = Submission {
                id: dto.id,
                code: dto.code,
                language: dto.language,
                date: dto.date,
                user_slug: dto.user_slug,
                page: dto.page,
                question_id: dto.question_id,
            };
            SubmissionRepository::upsert(&mut *tx, &submission).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
