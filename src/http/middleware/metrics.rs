//! Per-request metrics middleware.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::observability::metrics;

pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), start);
    response
}
