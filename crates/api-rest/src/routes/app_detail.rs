//! App detail endpoint.

use crate::{responses::JsonBody, state::AppState};
use appstore_mock_domain::AppDetail;
use axum::extract::State;

/// `GET /app.json`
///
/// Returns the featured application record.
pub async fn get_app_detail(State(state): State<AppState>) -> JsonBody<&'static AppDetail> {
    JsonBody(state.featured_app)
}
