//! Application state shared by the route handlers.

use appstore_mock_domain::{catalog, AppDetail};

/// Application state shared across all requests
///
/// Everything in here is read-only; handlers never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Record served by `/app.json`
    pub featured_app: &'static AppDetail,
}

impl AppState {
    /// Create application state backed by the static catalog
    pub fn new() -> Self {
        Self {
            featured_app: catalog::featured_app(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
