//! Plagiarism group handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Plagiarism routes (nested under /api/v1)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/plagiarismsMetadata",
            get(handler::metadata_by_detector_run),
        )
        .route("/plagiarism/{id}", get(handler::get_plagiarism))
        .route("/plagiarisms/bulk", post(handler::create_plagiarisms))
}
