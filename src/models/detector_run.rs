//! Detector run model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Record of one plagiarism-detector invocation against a question
///
/// IDs are store-generated and monotonically increasing. The reference
/// submission is optional: some detectors compare all submissions pairwise,
/// others anchor on a single suspect.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DetectorRun {
    pub id: i32,
    pub detector: String,
    pub parameters: String,
    pub question_id: i32,
    pub reference_submission_id: Option<i32>,
}
