//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, latency histogram, store size gauge)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every log event, request ID on every span
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
