//! Outbound path rewriting.
//!
//! # Rules (ordered, first match wins)
//! 1. `{prefix}/api/...` → `/api/...` (prefix stripped)
//! 2. `{prefix}/...`     → `/api/...` (prefix replaced)
//! 3. anything else      → `/api` + path
//!
//! Rule 1 must be evaluated before rule 2: its match string contains rule 2's.
//! Rewriting works on the full request target, so query strings pass through.

/// Rewrites inbound request targets into backend paths.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    /// `{prefix}/api/`
    prefixed_api: String,
    /// `{prefix}/`
    prefixed: String,
}

impl PathRewriter {
    /// Create a rewriter for the given prefix (e.g. `/proxy`, no trailing slash).
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            prefixed_api: format!("{}/api/", prefix),
            prefixed: format!("{}/", prefix),
        }
    }

    /// Rewrite an inbound target (path plus optional query).
    pub fn rewrite(&self, target: &str) -> String {
        if let Some(rest) = target.strip_prefix(&self.prefixed_api) {
            format!("/api/{}", rest)
        } else if let Some(rest) = target.strip_prefix(&self.prefixed) {
            format!("/api/{}", rest)
        } else {
            format!("/api{}", target)
        }
    }
}
