//! Copycatch - Contest Plagiarism Catalog
//!
//! This library provides the backend for the Copycatch platform, which
//! catalogs coding-contest problems, the submissions attached to them, the
//! plagiarism-detector runs launched against those submissions, and the
//! plagiarism groups each run produced.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and projections
//! - **Repositories**: Database access, including exemplar-based lookup
//! - **Models**: Flat domain records with foreign-key IDs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
