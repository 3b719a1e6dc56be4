//! Detector run handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Detector run routes (nested under /api/v1)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/detectorRuns",
            get(handler::runs_by_question).post(handler::create_run),
        )
        .route("/detectorRuns/bulk", get(handler::list_runs))
        .route("/detectorRuns/{id}", get(handler::get_run))
}
