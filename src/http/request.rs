//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID for log correlation
//! - Filter inbound headers down to the forwarding allow-list
//! - Buffer write-method bodies, bounded by the configured limit
//! - Build the independent outbound request for the backend
//!
//! # Design Decisions
//! - Only `user-agent`, `content-type`, `accept` and `cache-control` are
//!   forwarded; each falls back to a literal when absent or empty
//! - Cookies, credentials, Host and the request ID never reach the backend
//! - POST/PUT/PATCH bodies are buffered whole; other methods send none

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::relay::error::{BodyError, RelayError};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Headers copied to the backend, with the value used when the caller omits one.
pub const FORWARDED_HEADERS: [(&str, &str); 4] = [
    ("user-agent", "CORS-Proxy/1.0"),
    ("content-type", "application/json"),
    ("accept", "*/*"),
    ("cache-control", "no-cache"),
];

/// Characters of a request body shown in debug logs.
const BODY_PREVIEW_CHARS: usize = 100;

/// Generates UUID v4 request IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRelayRequestId;

impl MakeRequestId for MakeRelayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the outbound header set from the allow-list.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(FORWARDED_HEADERS.len());
    for (name, fallback) in FORWARDED_HEADERS {
        let value = inbound
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(fallback));
        headers.insert(HeaderName::from_static(name), value);
    }
    headers
}

/// Methods whose body is forwarded.
pub fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Read the whole inbound body, refusing anything over `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, BodyError> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(BodyError::TooLarge(limit)),
        Err(e) => Err(BodyError::Read(e.to_string())),
    }
}

/// Build the request sent to the backend.
///
/// Nothing from `inbound_headers` outside the allow-list is carried over.
pub fn build_outbound(
    method: &Method,
    url: &str,
    inbound_headers: &HeaderMap,
    body: Option<Bytes>,
) -> Result<Request<Body>, RelayError> {
    let uri: Uri = url.parse()?;

    let mut builder = Request::builder().method(method.clone()).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        *headers = forwarded_headers(inbound_headers);
    }

    let body = match body {
        Some(bytes) => Body::from(bytes),
        None => Body::empty(),
    };
    Ok(builder.body(body)?)
}

/// First characters of a body for logging, lossily decoded.
pub fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut chars = text.chars();
    let preview: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}
