//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the single dispatch handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Dispatch requests: preflight, health, or relay to the backend

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{request_id::SetRequestIdLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::{MakeRelayRequestId, X_REQUEST_ID};
use crate::http::response;
use crate::observability::metrics;
use crate::relay::Relay;
use crate::routing::{request_target, Dispatch, Router as DispatchRouter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<DispatchRouter>,
    pub relay: Relay,
}

/// HTTP server for the CORS relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            router: Arc::new(DispatchRouter::from_config(&config.routes)),
            relay: Relay::new(&config),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(X_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "request",
                request_id = %request_id,
                method = %request.method(),
                target = %request_target(request.uri()),
            )
        });

        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(trace)
            .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
    }

    /// The fully layered router, for serving or for in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.authority(),
            "CORS proxy server running at http://{}",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Single entry point; the dispatch order is decided by `DispatchRouter`.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().clone();
    let dispatch = state.router.classify(&method, request.uri());
    let label = dispatch.label();

    tracing::info!(
        method = %method,
        target = %request_target(request.uri()),
        dispatch = label,
        "Received request"
    );

    let response = match dispatch {
        Dispatch::Preflight => {
            tracing::debug!("Responding to OPTIONS preflight request directly");
            response::preflight()
        }
        Dispatch::Health => {
            tracing::debug!("Health check request");
            response::health()
        }
        Dispatch::Relay { path } => state.relay.forward(path, request).await,
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), label, start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, Method, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = RelayConfig::default();
        // Nothing listens here; any relayed request would fail.
        config.backend.host = "127.0.0.1".into();
        config.backend.port = 9;
        HttpServer::new(config)
    }

    #[tokio::test]
    async fn test_preflight_short_circuits() {
        let response = server()
            .router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/proxy/api/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    }

    #[tokio::test]
    async fn test_health_short_circuits() {
        let response = server()
            .router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], response::HEALTH_BODY.as_bytes());
    }

    #[test]
    fn test_config_is_kept() {
        assert_eq!(server().config().backend.port, 9);
    }
}
