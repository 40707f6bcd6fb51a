//! Configuration validation.
//!
//! Pure function `ServiceConfig → Result<(), Vec<ValidationError>>`; every
//! failing check is reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener.bind_address '{0}'")]
    BindAddress(String),

    #[error("listener.max_body_bytes must be greater than zero")]
    BodyLimit,

    #[error("storage.data_file must not be empty")]
    DataFile,

    #[error("invalid observability.metrics_address '{0}'")]
    MetricsAddress(String),
}

/// Render a list of validation errors as one line.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::BodyLimit);
    }
    if config.storage.data_file.as_os_str().is_empty() {
        errors.push(ValidationError::DataFile);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
