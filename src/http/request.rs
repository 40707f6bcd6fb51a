//! Request decoding and identification.
//!
//! # Responsibilities
//! - Assign a UUID v4 request ID to every request
//! - Decode JSON bodies, turning every decoding failure into 400
//!
//! # Design Decisions
//! - Unknown body fields (including `id`) are ignored
//! - Request ID added as early as possible for tracing

use axum::extract::FromRequest;
use axum::http::{HeaderName, HeaderValue, Request};
use serde::Deserialize;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::ApiError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Body accepted by create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProverbPayload {
    pub text: String,
}

/// JSON extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Generates a fresh UUID v4 for each request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}
