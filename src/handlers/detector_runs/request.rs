//! Detector run request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create detector run request
///
/// `id` is accepted but ignored: detector run IDs are store-generated.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetectorRunRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1))]
    pub detector: String,

    pub parameters: String,
    pub question_id: i32,
    pub reference_submission_id: Option<i32>,
}

/// Query parameters for looking up detector runs by question
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorRunsByQuestionQuery {
    pub question_name: String,
}
