//! Detector run service

use sqlx::PgPool;

use crate::{
    db::repositories::{
        DetectorRunFilter, DetectorRunRepository, PlagiarismRepository, QuestionFilter,
        QuestionRepository, SubmissionRepository,
    },
    error::{AppError, AppResult},
    handlers::detector_runs::{
        request::CreateDetectorRunRequest, response::DetectorRunResponse,
    },
    models::DetectorRun,
};

/// Detector run service for business logic
pub struct DetectorRunService;

impl DetectorRunService {
    /// List the detector runs launched against the question with the given name
    pub async fn runs_by_question_name(
        pool: &PgPool,
        question_name: &str,
    ) -> AppResult<Vec<DetectorRunResponse>> {
        let question = QuestionRepository::find_one(
            pool,
            &QuestionFilter {
                name: Some(question_name.to_string()),
                ..Default::default()
            },
        )
        .await?;

        let runs = DetectorRunRepository::find_all_by(
            pool,
            &DetectorRunFilter {
                question_id: Some(question.id),
                ..Default::default()
            },
        )
        .await?;

        futures::future::try_join_all(runs.into_iter().map(|r| Self::to_response(pool, r))).await
    }

    /// List all detector runs in insertion order
    pub async fn list_runs(pool: &PgPool) -> AppResult<Vec<DetectorRunResponse>> {
        let runs = DetectorRunRepository::find_all(pool).await?;

        futures::future::try_join_all(runs.into_iter().map(|r| Self::to_response(pool, r))).await
    }

    /// Get detector run by ID
    pub async fn get_run(pool: &PgPool, id: i32) -> AppResult<DetectorRunResponse> {
        let run = DetectorRunRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Detector run not found".to_string()))?;

        Self::to_response(pool, run).await
    }

    /// Record a detector invocation
    ///
    /// The run ID is store-generated; any ID in the payload is ignored.
    pub async fn create_run(
        pool: &PgPool,
        payload: CreateDetectorRunRequest,
    ) -> AppResult<DetectorRunResponse> {
        let mut tx = pool.begin().await?;

        if !QuestionRepository::exists(&mut *tx, payload.question_id).await? {
            return Err(AppError::BadRequest(format!(
                "Unknown question id: {}",
                payload.question_id
            )));
        }

        if let Some(reference_submission_id) = payload.reference_submission_id {
            if !SubmissionRepository::exists(&mut *tx, reference_submission_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Unknown reference submission id: {reference_submission_id}"
                )));
            }
        }

        let run = DetectorRunRepository::insert(
            &mut *tx,
            &payload.detector,
            &payload.parameters,
            payload.question_id,
            payload.reference_submission_id,
        )
        .await?;

        tx.commit().await?;

        Self::to_response(pool, run).await
    }

    /// Attach the `plagiarismGroupsCount` projection
    async fn to_response(pool: &PgPool, run: DetectorRun) -> AppResult<DetectorRunResponse> {
        let plagiarism_groups_count =
            PlagiarismRepository::count_by_detector_run(pool, run.id).await?;

        Ok(DetectorRunResponse {
            id: run.id,
            detector: run.detector,
            parameters: run.parameters,
            question_id: run.question_id,
            reference_submission_id: run.reference_submission_id,
            plagiarism_groups_count,
        })
    }
}
