//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Contest, question, and submission routes live at the root; detector run
//! and plagiarism routes live under `/api/v1`. Everything else is handled by
//! the SPA fallback.

pub mod contests;
pub mod detector_runs;
pub mod health;
pub mod plagiarisms;
pub mod questions;
pub mod spa;
pub mod submissions;

use axum::{extract::FromRequest, Router};

use crate::{error::AppError, state::AppState};

/// JSON extractor whose rejections go through the application error mapper
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Form extractor whose rejections go through the application error mapper
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Create all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(contests::routes())
        .merge(questions::routes())
        .merge(submissions::routes())
        .nest(
            "/api/v1",
            Router::new()
                .merge(health::routes())
                .merge(detector_runs::routes())
                .merge(plagiarisms::routes()),
        )
        .fallback(spa::index)
}
