//! Application builder.
//!
//! Assembles the store routes, shared state and middleware into an Axum
//! router.

use crate::{config::ApiConfig, middleware::logging_middleware, routes, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Create the main application router
pub fn create_app(config: ApiConfig) -> Router {
    routes::routes().with_state(AppState::new()).layer(
        ServiceBuilder::new()
            // Tracing
            .layer(TraceLayer::new_for_http())
            // Every response, errors included, is readable cross-origin
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            // Body size limit for /collect
            .layer(DefaultBodyLimit::max(config.max_body_size))
            // Custom middleware
            .layer(middleware::from_fn(logging_middleware)),
    )
}
