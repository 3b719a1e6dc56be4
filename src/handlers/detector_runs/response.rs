//! Detector run response DTOs

use serde::Serialize;

/// Detector run response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorRunResponse {
    pub id: i32,
    pub detector: String,
    pub parameters: String,
    pub question_id: i32,

    /// Omitted entirely when the run was not anchored on a reference submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_submission_id: Option<i32>,

    /// Number of plagiarism groups this run produced
    pub plagiarism_groups_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reference_submission_is_omitted() {
        let response = DetectorRunResponse {
            id: 1,
            detector: "D".to_string(),
            parameters: "p".to_string(),
            question_id: 10,
            reference_submission_id: None,
            plagiarism_groups_count: 0,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("referenceSubmissionId").is_none());
        assert_eq!(value["plagiarismGroupsCount"], 0);
    }

    #[test]
    fn test_present_reference_submission_is_serialized() {
        let response = DetectorRunResponse {
            id: 1,
            detector: "D".to_string(),
            parameters: "p".to_string(),
            question_id: 10,
            reference_submission_id: Some(7),
            plagiarism_groups_count: 2,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["referenceSubmissionId"], 7);
    }
}
