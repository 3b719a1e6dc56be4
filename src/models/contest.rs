//! Contest model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest database model
///
/// The ID is the source site's primary key, not store-generated. Questions
/// point back at their contest via `contest_id`; the `questionIds` projection
/// is computed at read time rather than held as an owning collection here.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: i32,
    pub slug: String,
}
