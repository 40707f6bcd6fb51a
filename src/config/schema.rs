//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the proverb service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Seed file location and shutdown persistence.
    pub storage: StorageConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Seed file read at startup, and written back on shutdown when
    /// persistence is enabled. Relative paths resolve against the working
    /// directory.
    pub data_file: PathBuf,

    /// Save the store to `data_file` on SIGINT/SIGTERM.
    pub persist_on_shutdown: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/proverbs.json"),
            persist_on_shutdown: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
