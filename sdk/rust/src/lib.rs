//! Client helpers for services reached through the CORS relay.

pub mod client;

pub use client::{resolve_service_url, RelayClient};
