//! Minimal App Store mock API server
//!
//! Runs on a single-threaded runtime; requests never share mutable state.

use anyhow::Result;
use appstore_mock_api::{server, telemetry::init_tracing, ApiConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ApiConfig::from_cli();

    init_tracing(&config.log_level, config.json_logs)?;

    server::run(config).await
}
