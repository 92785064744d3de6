//! Search endpoint.

use crate::responses::JsonBody;
use appstore_mock_domain::{AppDetail, SearchQuery};
use axum::extract::RawQuery;
use tracing::debug;

/// `GET /search?q=...`
///
/// The keyword is parsed and logged, but the store has nothing to search
/// so the result is always an empty list.
pub async fn search_apps(RawQuery(raw): RawQuery) -> JsonBody<Vec<AppDetail>> {
    let query = SearchQuery::from_query_string(raw.as_deref());
    debug!(q = %query.q, "Search requested");

    JsonBody(query.execute())
}
