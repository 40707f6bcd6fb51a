//! Request middleware.

pub mod metrics;
pub mod shutdown_gate;

pub use metrics::track_metrics;
pub use shutdown_gate::shutdown_gate;
