//! Request logging middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response},
    middleware::Next,
};
use std::{net::SocketAddr, time::Instant};
use tracing::{info, warn};

/// Middleware for logging one line per handled request
///
/// The client address comes from [`ConnectInfo`]; it is absent when the
/// router is driven in-process, in which case `-` is logged.
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let request_line = format!("{} {} {:?}", req.method(), req.uri(), req.version());

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            client = %client,
            request = %request_line,
            status = status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            client = %client,
            request = %request_line,
            status = status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request handled"
        );
    }

    response
}
