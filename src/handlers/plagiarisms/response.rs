//! Plagiarism group response DTOs

use serde::Serialize;

use crate::handlers::submissions::response::SubmissionResponse;

/// Full plagiarism group, member submissions included
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismResponse {
    pub id: i32,
    pub confidence_percentage: i32,
    pub language: String,
    pub detector_run_id: i32,

    /// Member submissions in the order the detector reported them
    pub submissions: Vec<SubmissionResponse>,
}

/// Plagiarism group metadata: the group without its submission bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismMetadataResponse {
    pub id: i32,
    pub number_of_submissions: i64,
    pub language: String,
    pub confidence_percentage: i32,
}
