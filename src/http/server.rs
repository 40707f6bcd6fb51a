//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the route table
//! - Wire up middleware (request ID, tracing, metrics, shutdown gate, body limit)
//! - Bind server to listener
//! - Stop accepting connections when shutdown is broadcast

use std::sync::Arc;

use axum::{body::Body, http::Request, middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::middleware::{shutdown_gate, track_metrics};
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::routing;
use crate::store::ProverbStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProverbStore>,
}

impl AppState {
    pub fn new(store: Arc<ProverbStore>) -> Self {
        Self { store }
    }
}

/// HTTP server for the proverb API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: &ServiceConfig, store: Arc<ProverbStore>) -> Self {
        let state = AppState::new(store);
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        routing::build_routes(state.clone())
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(middleware::from_fn_with_state(state, shutdown_gate))
            .layer(middleware::from_fn(track_metrics))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(&X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id,
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
