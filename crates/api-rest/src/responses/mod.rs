//! Standardized API response types.
//!
//! JSON bodies are written with a space after every `,` and `:` so the
//! byte layout matches what the store client was developed against.
//! Non-ASCII text is emitted literally.

mod formatter;

pub use formatter::{to_spaced_vec, SpacedFormatter};

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

const APPLICATION_JSON: &str = "application/json";

/// JSON response body using the spaced layout
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> IntoResponse for JsonBody<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match to_spaced_vec(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                error!(error = %err, "Failed to serialize response body");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
