//! Plagiarism group model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A group of submissions one detector run flagged as similar
///
/// Member submissions live in the `plagiarism_submissions` join table, which
/// also records the order the detector reported them in.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Plagiarism {
    pub id: i32,
    pub confidence_percentage: i32,
    pub language: String,
    pub detector_run_id: i32,
}
