//! Minimal App Store domain types
//!
//! This crate holds the data model served by the mock store API: the
//! application detail record, reviews, collect requests and search queries.
//! Nothing here is persisted; every value is either a process-wide constant
//! or lives for the duration of one request.
//!
//! ## Usage
//!
//! ```rust
//! use appstore_mock_domain::{catalog, CollectRequest, CollectResponse};
//!
//! let app = catalog::featured_app();
//! assert_eq!(app.screens.len(), 3);
//!
//! let request = CollectRequest::from_slice(br#"{"id": 42}"#).unwrap();
//! let response = CollectResponse::acknowledge(&request);
//! assert_eq!(response.message, "应用 42 收藏成功");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod catalog;
pub mod collect;
pub mod errors;
pub mod search;

// Re-export commonly used types
pub use app::{AppDetail, Review};
pub use collect::{CollectRequest, CollectResponse};
pub use errors::CollectError;
pub use search::SearchQuery;
