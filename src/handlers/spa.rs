//! Single-page application fallback
//!
//! Any GET that no API route matched serves the UI shell, so deep links like
//! `/contests/weekly-contest-1057` resolve client-side. The only API
//! discriminator is the first path segment: `api` paths never fall back.

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

/// Serve the UI shell for unmatched non-API GET requests
pub async fn index(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> AppResult<Response> {
    if method != Method::GET || is_api_path(uri.path()) {
        return Err(AppError::NotFound(format!("No route for {}", uri.path())));
    }

    let index_html = &state.config().static_files.index_html;
    let bytes = tokio::fs::read(index_html)
        .await
        .with_context(|| format!("reading {}", index_html.display()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        bytes,
    )
        .into_response())
}

/// True when the first path segment is exactly `api`
fn is_api_path(path: &str) -> bool {
    path.trim_start_matches('/').split('/').next() == Some("api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_recognized() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/v1/detectorRuns"));
    }

    #[test]
    fn test_non_api_paths_fall_through() {
        assert!(!is_api_path("/"));
        assert!(!is_api_path("/foo"));
        assert!(!is_api_path("/error"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/contests/weekly-contest-1057/report"));
    }
}
