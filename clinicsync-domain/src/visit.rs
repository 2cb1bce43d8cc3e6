use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{PetId, VisitId};

/// A clinic visit as read from the legacy store.
///
/// `date` renders as ISO-8601 (`%Y-%m-%d`); the target store holds that
/// exact rendering in its `visit_date` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: VisitId,
    pub pet_id: PetId,
    pub date: NaiveDate,
    pub description: String,
}

impl Visit {
    /// Creates a visit record.
    pub fn new(id: VisitId, pet_id: PetId, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id,
            pet_id,
            date,
            description: description.into(),
        }
    }
}
