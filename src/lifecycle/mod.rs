//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Load seed file → Build store → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Seal store + save (persistence variant) → Stop accepting
//!     → Drain in-flight requests → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown coordinator
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is served
//! - The final store read happens before the listener stops, under the store lock
//! - Requests arriving after the final read get 503
//! - Shutdown has no deadline and no retries

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownCoordinator, ShutdownOutcome};
pub use signals::termination_signal;
pub use startup::{load_store, run, serve, StartupError};
