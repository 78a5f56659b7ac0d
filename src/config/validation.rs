//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Check path shapes the dispatcher relies on
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs after file and command-line overrides are merged

use std::fmt;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend.host.trim().is_empty() {
        errors.push(ValidationError::new("backend.host", "must not be empty"));
    }
    if config.backend.port == 0 {
        errors.push(ValidationError::new("backend.port", "must be non-zero"));
    }

    let prefix = &config.routes.proxy_prefix;
    if !prefix.starts_with('/') {
        errors.push(ValidationError::new("routes.proxy_prefix", "must start with '/'"));
    } else if prefix.len() > 1 && prefix.ends_with('/') {
        errors.push(ValidationError::new(
            "routes.proxy_prefix",
            "must not end with '/'",
        ));
    } else if prefix == "/" {
        errors.push(ValidationError::new("routes.proxy_prefix", "must not be '/'"));
    }

    if !config.routes.health_path.starts_with('/') {
        errors.push(ValidationError::new("routes.health_path", "must start with '/'"));
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::new("timeouts.connect_secs", "must be greater than 0"));
    }
    if config.timeouts.response_secs == 0 {
        errors.push(ValidationError::new("timeouts.response_secs", "must be greater than 0"));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::new("limits.max_body_bytes", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RelayConfig::default();
        config.backend.host = "  ".into();
        config.backend.port = 0;
        config.timeouts.response_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["backend.host", "backend.port", "timeouts.response_secs"]);
    }

    #[test]
    fn test_proxy_prefix_shape() {
        let mut config = RelayConfig::default();

        config.routes.proxy_prefix = "proxy".into();
        assert!(validate_config(&config).is_err());

        config.routes.proxy_prefix = "/proxy/".into();
        assert!(validate_config(&config).is_err());

        config.routes.proxy_prefix = "/".into();
        assert!(validate_config(&config).is_err());

        config.routes.proxy_prefix = "/relay".into();
        assert!(validate_config(&config).is_ok());
    }
}
