//! Submission model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
///
/// `date` is an integer epoch timestamp supplied by the ingestion scripts.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i32,
    pub code: String,
    pub language: String,
    pub date: i64,
    pub user_slug: String,
    pub page: i32,
    pub question_id: i32,
}
