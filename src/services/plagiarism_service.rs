//! Plagiarism group service

use sqlx::PgPool;

use crate::{
    db::repositories::{
        DetectorRunRepository, PlagiarismFilter, PlagiarismRepository, SubmissionRepository,
    },
    error::{AppError, AppResult},
    handlers::plagiarisms::{
        request::CreatePlagiarismRequest,
        response::{PlagiarismMetadataResponse, PlagiarismResponse},
    },
};

/// Plagiarism group service for business logic
pub struct PlagiarismService;

impl PlagiarismService {
    /// List metadata for the plagiarism groups one detector run produced
    pub async fn metadata_by_detector_run(
        pool: &PgPool,
        detector_run_id: i32,
    ) -> AppResult<Vec<PlagiarismMetadataResponse>> {
        if !DetectorRunRepository::exists(pool, detector_run_id).await? {
            return Err(AppError::NotFound("Detector run not found".to_string()));
        }

        let plagiarisms = PlagiarismRepository::find_all_by(
            pool,
            &PlagiarismFilter {
                detector_run_id: Some(detector_run_id),
                ..Default::default()
            },
        )
        .await?;

        futures::future::try_join_all(plagiarisms.into_iter().map(|p| async move {
            let number_of_submissions =
                PlagiarismRepository::submission_count(pool, p.id).await?;

            Ok(PlagiarismMetadataResponse {
                id: p.id,
                number_of_submissions,
                language: p.language,
                confidence_percentage: p.confidence_percentage,
            })
        }))
        .await
    }

    /// Get a plagiarism group with its member submissions
    pub async fn get_plagiarism(pool: &PgPool, id: i32) -> AppResult<PlagiarismResponse> {
        let plagiarism = PlagiarismRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plagiarism group not found".to_string()))?;

        let submissions = SubmissionRepository::find_by_plagiarism(pool, plagiarism.id).await?;

        Ok(PlagiarismResponse {
            id: plagiarism.id,
            confidence_percentage: plagiarism.confidence_percentage,
            language: plagiarism.language,
            detector_run_id: plagiarism.detector_run_id,
            submissions: submissions.into_iter().map(Into::into).collect(),
        })
    }

    /// Persist a batch of plagiarism groups, all-or-nothing
    ///
    /// Group IDs are store-generated; any ID in the payload is ignored. The
    /// member set keeps the order the detector reported, with duplicate IDs
    /// collapsed to their first occurrence.
    pub async fn create_plagiarisms(
        pool: &PgPool,
        payload: Vec<CreatePlagiarismRequest>,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        for dto in payload {
            if !DetectorRunRepository::exists(&mut *tx, dto.detector_run_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Unknown detector run id: {}",
                    dto.detector_run_id
                )));
            }

            let mut submission_ids: Vec<i32> = Vec::with_capacity(dto.submission_ids.len());
            for submission_id in dto.submission_ids {
                if submission_ids.contains(&submission_id) {
                    continue;
                }
                if !SubmissionRepository::exists(&mut *tx, submission_id).await? {
                    return Err(AppError::BadRequest(format!(
                        "Unknown submission id: {submission_id}"
                    )));
                }
                submission_ids.push(submission_id);
            }

            PlagiarismRepository::insert(
                &mut *tx,
                dto.confidence_percentage,
                &dto.language,
                dto.detector_run_id,
                &submission_ids,
            )
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
