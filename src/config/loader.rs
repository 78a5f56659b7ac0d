//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::overrides::Overrides;
use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<RelayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read a TOML file. Validation happens after overrides are applied.
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Build the effective configuration: optional file (or defaults), then
/// command-line/environment overrides, then validation.
pub fn resolve_config(overrides: &Overrides) -> Result<RelayConfig, ConfigError> {
    let mut config = match &overrides.config {
        Some(path) => read_config(path)?,
        None => RelayConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_config("[backend]\nport = \"eight thousand\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_resolve_applies_overrides_over_defaults() {
        let overrides = Overrides {
            backend_host: Some("10.0.0.5".into()),
            backend_port: Some(9000),
            port: Some(4000),
            ..Default::default()
        };

        let config = resolve_config(&overrides).unwrap();
        assert_eq!(config.backend.authority(), "10.0.0.5:9000");
        assert_eq!(config.listener.bind_address(), "0.0.0.0:4000");
    }

    #[test]
    fn test_flags_win_over_file_values() {
        let path = std::env::temp_dir().join(format!("cors-relay-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[backend]\nhost = \"api.internal\"\nport = 9000\n\n[routes]\nhealth_path = \"/healthz\"\n",
        )
        .unwrap();

        let overrides = Overrides::try_parse_from([
            "cors-relay",
            "--config",
            path.to_str().unwrap(),
            "--backend-port",
            "9100",
        ])
        .unwrap();
        let config = resolve_config(&overrides);
        let _ = fs::remove_file(&path);
        let config = config.unwrap();

        assert_eq!(config.backend.port, 9100);
        assert_eq!(config.backend.host, "api.internal");
        assert_eq!(config.routes.health_path, "/healthz");
        assert_eq!(config.listener.port, 3001);
    }

    #[test]
    fn test_resolve_rejects_invalid_override() {
        let overrides = Overrides {
            backend_port: Some(0),
            ..Default::default()
        };

        let err = resolve_config(&overrides).unwrap_err();
        assert!(err.to_string().contains("backend.port"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let overrides = Overrides {
            config: Some("/nonexistent/cors-relay.toml".into()),
            ..Default::default()
        };

        assert!(matches!(resolve_config(&overrides), Err(ConfigError::Io(_))));
    }
}
