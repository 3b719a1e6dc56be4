//! Plagiarism group request DTOs

use serde::Deserialize;
use validator::Validate;

/// One plagiarism group in a bulk insert request
///
/// `id` is accepted but ignored: plagiarism IDs are store-generated.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlagiarismRequest {
    pub id: Option<i32>,

    #[validate(range(min = 0, max = 100))]
    pub confidence_percentage: i32,

    #[validate(length(min = 1))]
    pub submission_ids: Vec<i32>,

    pub detector_run_id: i32,

    #[validate(length(min = 1))]
    pub language: String,
}

/// Query parameters for plagiarism metadata lookups
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismsMetadataQuery {
    pub detector_run_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_ids_is_rejected() {
        let dto = CreatePlagiarismRequest {
            id: None,
            confidence_percentage: 90,
            submission_ids: vec![],
            detector_run_id: 1,
            language: "python3".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_confidence_out_of_range_is_rejected() {
        let dto = CreatePlagiarismRequest {
            id: None,
            confidence_percentage: 101,
            submission_ids: vec![1],
            detector_run_id: 1,
            language: "python3".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_group_passes() {
        let dto = CreatePlagiarismRequest {
            id: None,
            confidence_percentage: 0,
            submission_ids: vec![1, 2],
            detector_run_id: 1,
            language: "cpp".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
