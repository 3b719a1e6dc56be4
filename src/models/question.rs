//! Question model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question database model
///
/// `number` is the problem's number in the site catalog and may be unknown;
/// `number_in_contest` is its slot within the contest (typically 1..4).
/// `name` is unique in practice and used as a lookup key by the edit path.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub number: Option<i32>,
    pub number_in_contest: i32,
    pub name: String,
    pub description: String,
    pub contest_id: i32,
}
