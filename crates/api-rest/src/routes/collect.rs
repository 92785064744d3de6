//! Collect (favorite) endpoint.

use crate::{error::ApiResult, responses::JsonBody};
use appstore_mock_domain::{CollectRequest, CollectResponse};
use axum::extract::rejection::BytesRejection;
use bytes::Bytes;
use tracing::info;

/// `POST /collect`
///
/// Acknowledges the request without storing anything.
pub async fn collect_app(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<JsonBody<CollectResponse>> {
    let body = body?;
    let request = CollectRequest::from_slice(&body)?;

    info!(app_id = %request.id, "App collected");

    Ok(JsonBody(CollectResponse::acknowledge(&request)))
}
