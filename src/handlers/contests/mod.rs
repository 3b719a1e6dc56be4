//! Contest catalog handlers

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

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contests/bulk", get(handler::list_contests))
        .route("/contests", post(handler::create_contest))
        .route("/contest/{id}", get(handler::get_contest))
}
