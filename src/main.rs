//! CORS relay.
//!
//! A one-hop HTTP relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  CORS RELAY                  │
//!                        │                                              │
//!   Browser Request      │  ┌─────────┐    ┌──────────┐                 │
//!   ─────────────────────┼─▶│  http   │───▶│ routing  │─┬─ OPTIONS ───▶ preflight (200)
//!                        │  │ server  │    │ dispatch │ ├─ /health ───▶ health (200)
//!                        │  └─────────┘    └──────────┘ │               │
//!                        │                              ▼               │
//!                        │                       ┌────────────┐         │
//!                        │                       │   relay    │─────────┼──▶ Backend
//!                        │                       │  forward   │◀────────┼─── (one call)
//!                        │                       └─────┬──────┘         │
//!   Browser Response     │  ┌──────────────┐           │                │
//!   ◀────────────────────┼──│ response +   │◀──────────┘                │
//!                        │  │ CORS headers │  (stream, or 502)          │
//!                        │  └──────────────┘                            │
//!                        └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use cors_relay::config::{resolve_config, Overrides};
use cors_relay::lifecycle::startup;
use cors_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let overrides = Overrides::parse();
    let config = resolve_config(&overrides)?;

    logging::init(&config.observability);

    tracing::info!("cors-relay v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await
}
