//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (axum::serve)
//!     → request.rs (request ID assigned, JSON body decoded)
//!     → middleware/ (metrics, shutdown gate)
//!     → routing (method + path pattern → handler)
//!     → handlers.rs (Store operation)
//!     → response.rs (status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{JsonBody, MakeRequestUuidV4, ProverbPayload, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
