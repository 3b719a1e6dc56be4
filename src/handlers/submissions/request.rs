//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

/// One submission in a bulk ingest request
///
/// IDs are the source site's submission IDs; re-posting an ID overwrites the
/// stored record.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub id: i32,
    pub code: String,

    #[validate(length(min = 1))]
    pub language: String,

    pub date: i64,
    pub user_slug: String,
    pub page: i32,
    pub question_id: i32,
}

/// Query parameters for listing submissions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubmissionsQuery {
    pub question_id: Option<i32>,
}
