//! CORS response headers.
//!
//! Every response the relay emits carries the same four permissive headers.
//! Relayed responses are built by merging backend headers first and these
//! overrides second, so a backend can never narrow them.

use axum::http::{
    header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
    },
    HeaderMap, HeaderName, HeaderValue,
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, PATCH";
pub const ALLOW_HEADERS: &str =
    "Content-Type, Authorization, Accept, Origin, X-Requested-With, X-CSRF-Token, Cache-Control";
pub const ALLOW_CREDENTIALS: &str = "true";

/// Preflight cache lifetime: 24 hours.
pub const PREFLIGHT_MAX_AGE_SECS: &str = "86400";

/// The four headers set on every response, in emission order.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN)),
        (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS)),
        (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS)),
        (ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static(ALLOW_CREDENTIALS)),
    ]
}

/// Merge `base` with the CORS overrides. Same-named headers in `base`
/// (including repeated values) are replaced; everything else is kept.
pub fn with_cors(base: &HeaderMap) -> HeaderMap {
    let mut merged = base.clone();
    for (name, value) in cors_headers() {
        merged.insert(name, value);
    }
    merged
}

/// CORS overrides plus the preflight max-age.
pub fn preflight_headers() -> HeaderMap {
    let mut headers = with_cors(&HeaderMap::new());
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS));
    headers
}
