//! Forwarding relay subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatch::Relay { path }
//!     → forward.rs (buffer write-method body, build outbound request)
//!     → client.rs (one call to the backend, bounded by timeouts)
//!     → http/response.rs (merge CORS headers, stream body back)
//!
//! On failure:
//!     → error.rs (RelayError)
//!     → 502 Bad Gateway naming host:port and the cause
//! ```
//!
//! # Design Decisions
//! - No retries: every relayed request costs exactly one backend call
//! - No caching: identical requests are forwarded independently
//! - Backend address fixed at construction, never read from globals

pub mod client;
pub mod error;
pub mod forward;

pub use client::BackendClient;
pub use error::{BodyError, RelayError};
pub use forward::Relay;
