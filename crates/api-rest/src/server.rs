//! Listener setup and graceful shutdown.

use crate::{app::create_app, config::ApiConfig};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

/// Startup banner listing the available endpoints
pub fn banner(port: u16) -> String {
    [
        "🚀 极简 App Store 模拟 API 服务器启动成功!".to_string(),
        format!("📍 服务地址: http://localhost:{port}"),
        "📋 可用接口:".to_string(),
        "   GET  /app.json     - 获取应用详情".to_string(),
        "   GET  /search?q=关键词 - 搜索应用".to_string(),
        "   POST /collect      - 收藏应用".to_string(),
        "⏹️  按 Ctrl+C 停止服务器".to_string(),
        "-".repeat(50),
    ]
    .join("\n")
}

/// Bind the configured address and serve until Ctrl+C
pub async fn run(config: ApiConfig) -> Result<()> {
    let address = config.server_address();
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    serve(listener, config).await
}

/// Serve on an already bound listener until Ctrl+C
pub async fn serve(listener: TcpListener, config: ApiConfig) -> Result<()> {
    let local_addr = listener.local_addr()?;
    let app = create_app(config);

    println!("{}", banner(local_addr.port()));
    info!(address = %local_addr, "Mock API server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    println!("\n🛑 服务器已停止");
    info!("Listener closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_endpoints() {
        let banner = banner(8000);

        assert!(banner.contains("http://localhost:8000"));
        assert!(banner.contains("GET  /app.json"));
        assert!(banner.contains("GET  /search?q="));
        assert!(banner.contains("POST /collect"));
        assert!(banner.ends_with(&"-".repeat(50)));
    }
}
