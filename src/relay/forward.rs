//! The forwarding operation.
//!
//! One inbound request becomes exactly one outbound request. Nothing is
//! written to the caller until the backend headers arrive or the call fails.

use axum::body::Body;
use axum::http::{Request, Response};

use crate::config::{BackendConfig, RelayConfig};
use crate::http::request::{body_preview, build_outbound, carries_body, read_body};
use crate::http::response;
use crate::observability::metrics;
use crate::relay::client::BackendClient;
use crate::relay::error::RelayError;

#[derive(Clone)]
pub struct Relay {
    client: BackendClient,
    max_body_bytes: usize,
}

impl Relay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: BackendClient::new(config.backend.clone(), &config.timeouts),
            max_body_bytes: config.limits.max_body_bytes,
        }
    }

    pub fn backend(&self) -> &BackendConfig {
        self.client.backend()
    }

    /// Forward `request` to `path` on the backend and relay the answer.
    pub async fn forward(&self, path: String, request: Request<Body>) -> Response<Body> {
        let (parts, body) = request.into_parts();

        // Bodies of other methods are dropped unread.
        let body = if carries_body(&parts.method) {
            match read_body(body, self.max_body_bytes).await {
                Ok(bytes) => {
                    if !bytes.is_empty() {
                        tracing::debug!(body = %body_preview(&bytes), "Request body");
                    }
                    Some(bytes)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting request body");
                    return response::body_rejected(&e);
                }
            }
        } else {
            None
        };

        let url = self.client.url_for(&path);
        tracing::info!(url = %url, "Proxying request");

        let outbound = match build_outbound(&parts.method, &url, &parts.headers, body) {
            Ok(req) => req,
            Err(e) => return self.unreachable(e),
        };

        match self.client.send(outbound).await {
            Ok(backend_response) => {
                tracing::info!(
                    status = backend_response.status().as_u16(),
                    "Received response from backend"
                );
                response::relayed(backend_response)
            }
            Err(e) => self.unreachable(e),
        }
    }

    fn unreachable(&self, error: RelayError) -> Response<Body> {
        let authority = self.backend().authority();
        tracing::error!(
            backend = %authority,
            kind = error.kind(),
            error = %error,
            "Proxy request error"
        );
        metrics::record_backend_error(error.kind());
        response::bad_gateway(&authority, &error)
    }
}
