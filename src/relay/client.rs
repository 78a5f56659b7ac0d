//! Backend HTTP client.
//!
//! # Responsibilities
//! - Hold the one configured backend address
//! - Enforce connect and response-header timeouts
//! - Issue exactly one request per call (no retries)

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{BackendConfig, TimeoutConfig};
use crate::relay::error::RelayError;

#[derive(Clone)]
pub struct BackendClient {
    client: Client<HttpConnector, Body>,
    backend: BackendConfig,
    response_timeout: Duration,
}

impl BackendClient {
    pub fn new(backend: BackendConfig, timeouts: &TimeoutConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeouts.connect()));

        let client = Client::builder(TokioExecutor::new()).build(connector);

        Self {
            client,
            backend,
            response_timeout: timeouts.response(),
        }
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// Absolute backend URL for a rewritten path.
    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{}", self.backend.authority(), path)
    }

    /// Send one request and wait for the response headers.
    /// The body is left for the caller to stream.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Incoming>, RelayError> {
        match tokio::time::timeout(self.response_timeout, self.client.request(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(RelayError::Upstream(e)),
            Err(_) => Err(RelayError::Timeout(self.response_timeout)),
        }
    }
}
