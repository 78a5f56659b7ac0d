//! Command-line and environment overrides.
//!
//! Every flag can also be set through its `RELAY_*` environment variable.
//! Unset flags leave the file (or default) value untouched.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::RelayConfig;

#[derive(Debug, Default, Parser)]
#[command(name = "cors-relay")]
#[command(about = "Relay browser requests to a fixed backend with permissive CORS headers", long_about = None)]
pub struct Overrides {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long, env = "RELAY_BIND_HOST")]
    pub bind_host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "RELAY_PORT")]
    pub port: Option<u16>,

    /// Backend host name or IP address.
    #[arg(long, env = "RELAY_BACKEND_HOST")]
    pub backend_host: Option<String>,

    /// Backend port.
    #[arg(long, env = "RELAY_BACKEND_PORT")]
    pub backend_port: Option<u16>,

    /// Backend connect timeout in seconds.
    #[arg(long, env = "RELAY_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Backend response-header timeout in seconds.
    #[arg(long, env = "RELAY_RESPONSE_TIMEOUT_SECS")]
    pub response_timeout_secs: Option<u64>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, env = "RELAY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Overrides {
    /// Write every provided value into `config`.
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(host) = &self.bind_host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(host) = &self.backend_host {
            config.backend.host = host.clone();
        }
        if let Some(port) = self.backend_port {
            config.backend.port = port;
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.timeouts.connect_secs = secs;
        }
        if let Some(secs) = self.response_timeout_secs {
            config.timeouts.response_secs = secs;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}
