//! Minimal App Store mock REST API
//!
//! This crate serves the three canned endpoints the store client talks to
//! during development: the featured app detail, an always-empty search and
//! a collect acknowledgment. Nothing is stored between requests.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: Endpoint handlers and the 404 fallback
//! - **middleware**: Request logging
//! - **responses**: JSON body encoding
//! - **error**: Plain-text error responses
//! - **server**: Listener, banner and graceful shutdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use appstore_mock_api::{server, ApiConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     server::run(ApiConfig::default()).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
