//! API configuration.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

/// Default listening port expected by the store client
pub const DEFAULT_PORT: u16 = 8000;

/// Default maximum collect body size in bytes
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024; // 1 MB

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Log level
    pub log_level: String,

    /// Emit logs as JSON
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "appstore-mock-api")]
#[command(author, version, about = "Mock API server for the minimal App Store client", long_about = None)]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Maximum collect body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_SIZE)]
    pub max_body_size: usize,
}

impl From<CliArgs> for ApiConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            max_body_size: args.max_body_size,
            log_level: args.log_level,
            json_logs: args.json_logs,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process arguments
    pub fn from_cli() -> Self {
        CliArgs::parse().into()
    }

    /// Load configuration from an explicit argument list
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(CliArgs::try_parse_from(args)?.into())
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::try_from_args(["appstore-mock-api"]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_port_override() {
        let config = ApiConfig::try_from_args(["appstore-mock-api", "-p", "9000"]).unwrap();
        assert_eq!(config.port, 9000);

        let config =
            ApiConfig::try_from_args(["appstore-mock-api", "--port", "8081", "--json-logs"])
                .unwrap();
        assert_eq!(config.port, 8081);
        assert!(config.json_logs);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(ApiConfig::try_from_args(["appstore-mock-api", "--port", "70000"]).is_err());
        assert!(ApiConfig::try_from_args(["appstore-mock-api", "--port", "abc"]).is_err());
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let parsed = ApiConfig::try_from_args(["appstore-mock-api"]).unwrap();
        let default = ApiConfig::default();

        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.max_body_size, default.max_body_size);
    }
}
