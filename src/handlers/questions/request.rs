//! Question request DTOs

use serde::Deserialize;
use validator::Validate;

/// Question payload shared by the create and edit endpoints
///
/// `id` and `number` are optional; the create path requires `id` (question
/// IDs come from the source site) and the edit path looks the question up by
/// `name` and never changes its ID.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub id: Option<i32>,
    pub number: Option<i32>,
    pub number_in_contest: i32,

    #[validate(length(min = 1))]
    pub name: String,

    pub description: String,

    #[validate(length(min = 1))]
    pub contest_slug: String,
}

/// Query parameters for looking up questions by contest
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsByContestQuery {
    pub contest_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_fields() {
        let dto: QuestionRequest = serde_json::from_str(
            r#"{"id":10,"numberInContest":3,"name":"ciao","description":"x","contestSlug":"weekly-contest-1057"}"#,
        )
        .unwrap();
        assert_eq!(dto.id, Some(10));
        assert_eq!(dto.number, None);
        assert_eq!(dto.number_in_contest, 3);
        assert_eq!(dto.contest_slug, "weekly-contest-1057");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = serde_json::from_str::<QuestionRequest>(
            r#"{"id":10,"name":"ciao","description":"x","contestSlug":"weekly-contest-1057"}"#,
        );
        assert!(result.is_err());
    }
}
