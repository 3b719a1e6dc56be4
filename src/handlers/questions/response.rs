//! Question response DTOs

use serde::Serialize;

/// Question response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: i32,

    /// Problem number in the site catalog; omitted when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    pub number_in_contest: i32,
    pub name: String,
    pub description: String,
    pub contest_id: i32,

    /// IDs of the detector runs launched against this question, in insertion order
    pub detector_run_ids: Vec<i32>,
}
