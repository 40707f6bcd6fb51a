//! Store error definitions.

use thiserror::Error;

use crate::store::ProverbId;

/// Errors returned by [`ProverbStore`](crate::store::ProverbStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entry carries the requested id.
    #[error("proverb {0} not found")]
    NotFound(ProverbId),

    /// The seed data contains the same id more than once.
    #[error("duplicate proverb id {0} in seed data")]
    DuplicateId(ProverbId),

    /// The id counter cannot advance past the largest id.
    #[error("proverb id space exhausted")]
    IdsExhausted,

    /// The store has been sealed for shutdown and no longer accepts writes.
    #[error("service is shutting down")]
    ShuttingDown,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
