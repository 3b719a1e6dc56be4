//! Contest request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create contest request (form-encoded)
///
/// Contest IDs come from the source site, so the caller supplies them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    pub id: i32,

    #[validate(length(min = 1))]
    pub slug: String,
}
