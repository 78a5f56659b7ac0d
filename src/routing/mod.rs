//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, target)
//!     → router.rs (classify: Preflight | Health | Relay)
//!     → rewrite.rs (Relay only: derive the backend path)
//!     → Return: Dispatch
//! ```
//!
//! # Design Decisions
//! - Dispatch decided before any handler runs
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always yields the same dispatch
//! - First match wins

pub mod rewrite;
pub mod router;

pub use rewrite::PathRewriter;
pub use router::{request_target, Dispatch, Router};
