//! The proverb entry type.

use serde::{Deserialize, Serialize};

/// Identifier of a stored proverb.
pub type ProverbId = u64;

/// One addressable text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proverb {
    pub id: ProverbId,
    pub text: String,
}

impl Proverb {
    pub fn new(id: ProverbId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
