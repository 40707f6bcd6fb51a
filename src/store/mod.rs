//! Proverb storage subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     seed file (JSON array)
//!     → persistence.rs (load_proverbs)
//!     → memory.rs (ProverbStore::new, next_id = max id + 1)
//!     → shared via Arc to the handler state
//!
//! Per request:
//!     handler → ProverbStore (single exclusive lock) → Proverb / StoreError
//!
//! Shutdown (persistence variant):
//!     ProverbStore::seal (final snapshot under the lock)
//!     → persistence.rs (save_proverbs)
//! ```
//!
//! # Design Decisions
//! - One mutex guards both the entry sequence and the id counter
//! - Ids are allocated monotonically and never reissued after deletion
//! - Insertion order is preserved for listing; lookups are linear scans

pub mod error;
pub mod memory;
pub mod persistence;
pub mod proverb;

pub use error::{StoreError, StoreResult};
pub use memory::{ProverbStore, FIRST_ID};
pub use persistence::{load_proverbs, save_proverbs, PersistenceError};
pub use proverb::{Proverb, ProverbId};
