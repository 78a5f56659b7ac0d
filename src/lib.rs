//! CORS relay library.
//!
//! Forwards browser requests to one fixed backend and stamps permissive
//! CORS headers on every response, so a frontend served from another
//! origin can call the backend directly.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod routing;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
