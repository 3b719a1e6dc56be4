//! Question catalog handlers

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

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions/bulk", get(handler::list_questions))
        .route("/questions", get(handler::questions_by_contest))
        .route("/question/{id}", get(handler::get_question))
        .route(
            "/question",
            post(handler::create_question).patch(handler::edit_question),
        )
}
