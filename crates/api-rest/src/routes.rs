//! HTTP route handlers.
//!
//! The store exposes three endpoints. Anything else, including a known
//! path with the wrong method, is answered with a plain 404.

pub mod app_detail;
pub mod collect;
pub mod search;

use crate::{error::ApiError, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// All store routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/app.json",
            get(app_detail::get_app_detail)
                .head(not_found)
                .fallback(not_found),
        )
        .route(
            "/search",
            get(search::search_apps).head(not_found).fallback(not_found),
        )
        .route("/collect", post(collect::collect_app).fallback(not_found))
        .fallback(not_found)
}

/// Fallback for unmatched methods and paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
