//! Shutdown gate middleware.
//! Rejects new requests once the store has been sealed for shutdown.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::{ApiError, AppState};

pub async fn shutdown_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.store.is_sealed() {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejecting request during shutdown"
        );
        return ApiError::ShuttingDown.into_response();
    }
    next.run(request).await
}
