//! Relay error types.

use std::error::Error as StdError;
use std::time::Duration;

use axum::http::uri::InvalidUri;
use thiserror::Error;

/// Errors that make the backend unreachable for a single request.
///
/// Every variant is reported to the caller as 502 Bad Gateway.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The rewritten target did not form a valid backend URI.
    #[error("invalid backend URI: {0}")]
    InvalidUri(#[from] InvalidUri),

    /// The outbound request could not be assembled.
    #[error("failed to build backend request: {0}")]
    Request(#[from] axum::http::Error),

    /// Connect, DNS, or transport failure before response headers arrived.
    #[error("{}", error_chain(.0))]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// Backend did not send response headers in time.
    #[error("backend did not respond within {0:?}")]
    Timeout(Duration),
}

impl RelayError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::InvalidUri(_) => "invalid_uri",
            RelayError::Request(_) => "request",
            RelayError::Upstream(e) if e.is_connect() => "connect",
            RelayError::Upstream(_) => "transport",
            RelayError::Timeout(_) => "timeout",
        }
    }
}

/// Failure reading a write-method body from the caller.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds {0} bytes")]
    TooLarge(usize),

    #[error("failed to read request body: {0}")]
    Read(String),
}

/// Render an error followed by each of its sources, e.g.
/// `client error (Connect): tcp connect error: Connection refused (os error 111)`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
