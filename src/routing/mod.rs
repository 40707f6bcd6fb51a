//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route table lookup)
//!     → matcher.rs (constrain `{id}` to decimal digits)
//!     → handler, or 404 / 405 without reaching one
//! ```
//!
//! # Design Decisions
//! - Routes built once at startup, immutable at runtime
//! - Non-digit ids never reach a handler
//! - Deterministic: same input always matches same route

pub mod matcher;
pub mod router;

pub use matcher::{match_id_segment, PathId};
pub use router::build_routes;
