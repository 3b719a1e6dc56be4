//! Submission response DTOs

use serde::Serialize;

use crate::models::Submission;

/// Submission response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: i32,
    pub code: String,
    pub language: String,
    pub date: i64,
    pub user_slug: String,
    pub page: i32,
    pub question_id: i32,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            code: submission.code,
            language: submission.language,
            date: submission.date,
            user_slug: submission.user_slug,
            page: submission.page,
            question_id: submission.question_id,
        }
    }
}
