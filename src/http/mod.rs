//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → routing (Preflight | Health | Relay)
//!     → request.rs (allow-listed headers, buffered body)
//!     → relay (backend call)
//!     → response.rs (merge CORS headers, stream body)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRelayRequestId, X_REQUEST_ID};
pub use server::HttpServer;
