//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → command-line overrides (main.rs)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the service runs without a config file
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation reports every problem at once, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, StorageConfig};
pub use validation::{validate_config, ValidationError};
