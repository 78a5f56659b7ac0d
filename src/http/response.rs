//! Response handling and transformation.
//!
//! # Responsibilities
//! - Answer preflight and health requests locally
//! - Re-emit backend responses with CORS overrides merged in
//! - Map backend failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Streaming responses avoid buffering entire body
//! - Status code copied verbatim from the backend
//! - Every response, local or relayed, carries the CORS headers

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Response, StatusCode};
use http_body_util::BodyExt;
use hyper::body::Incoming;

use crate::http::cors::{preflight_headers, with_cors};
use crate::observability::metrics;
use crate::relay::error::{BodyError, RelayError};

pub const HEALTH_BODY: &str = "Proxy server is running";

/// 200 with an empty body, CORS headers and max-age.
pub fn preflight() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.headers_mut() = preflight_headers();
    response
}

/// 200 with a static liveness message.
pub fn health() -> Response<Body> {
    plain_text(StatusCode::OK, HEALTH_BODY.to_string())
}

/// Re-emit a backend response. Headers are merged as backend first,
/// CORS second; the body is streamed through as it arrives.
pub fn relayed(backend: Response<Incoming>) -> Response<Body> {
    let (mut parts, body) = backend.into_parts();
    parts.headers = with_cors(&parts.headers);

    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Backend response stream aborted");
        metrics::record_backend_error("stream");
        e
    });

    Response::from_parts(parts, Body::new(body))
}

/// 502 naming the backend and the underlying failure.
pub fn bad_gateway(backend_authority: &str, error: &RelayError) -> Response<Body> {
    plain_text(
        StatusCode::BAD_GATEWAY,
        format!(
            "Proxy error: Could not connect to backend at {}\n\nError details: {}",
            backend_authority, error
        ),
    )
}

/// 413 or 400 when the caller's body could not be buffered.
pub fn body_rejected(error: &BodyError) -> Response<Body> {
    let status = match error {
        BodyError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        BodyError::Read(_) => StatusCode::BAD_REQUEST,
    };
    plain_text(status, error.to_string())
}

fn plain_text(status: StatusCode, text: String) -> Response<Body> {
    let mut headers = with_cors(&HeaderMap::new());
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));

    let mut response = Response::new(Body::from(text));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
