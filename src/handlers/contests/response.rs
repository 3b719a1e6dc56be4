//! Contest response DTOs

use serde::Serialize;

/// Contest response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub id: i32,
    pub slug: String,
    /// IDs of the contest's questions, in insertion order
    pub question_ids: Vec<i32>,
}
