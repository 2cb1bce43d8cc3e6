use serde::{Deserialize, Serialize};

use crate::VetId;

/// A member of the clinic's veterinary staff as read from the legacy store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    pub id: VetId,
    pub first_name: String,
    pub last_name: String,
}

impl Vet {
    /// Creates a vet record.
    pub fn new(id: VetId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
