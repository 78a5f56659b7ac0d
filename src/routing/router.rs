//! Request dispatch.
//!
//! # Responsibilities
//! - Classify every inbound request into exactly one terminal branch
//! - Keep the evaluation order an explicit, testable contract
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Classification only looks at method and request target; never the body

use axum::http::{Method, Uri};

use crate::config::RouteConfig;
use crate::routing::rewrite::PathRewriter;

/// Terminal branch chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// `OPTIONS` on any path; answered locally.
    Preflight,
    /// Exact health path; answered locally.
    Health,
    /// Everything else; forwarded to `path` on the backend.
    Relay { path: String },
}

impl Dispatch {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Dispatch::Preflight => "preflight",
            Dispatch::Health => "health",
            Dispatch::Relay { .. } => "relay",
        }
    }
}

/// Classifies requests; first match wins:
/// `OPTIONS` → preflight, health path → health, otherwise relay.
#[derive(Debug, Clone)]
pub struct Router {
    health_path: String,
    rewriter: PathRewriter,
}

impl Router {
    pub fn from_config(config: &RouteConfig) -> Self {
        Self {
            health_path: config.health_path.clone(),
            rewriter: PathRewriter::new(&config.proxy_prefix),
        }
    }

    pub fn classify(&self, method: &Method, uri: &Uri) -> Dispatch {
        if *method == Method::OPTIONS {
            return Dispatch::Preflight;
        }

        let target = request_target(uri);
        if target == self.health_path {
            return Dispatch::Health;
        }

        Dispatch::Relay {
            path: self.rewriter.rewrite(target),
        }
    }
}

/// Path plus query, as sent on the request line.
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
}
