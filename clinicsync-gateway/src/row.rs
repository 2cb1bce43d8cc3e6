//! Raw row projections and the lookup outcome type.
//!
//! Rows carry untyped `i64` ids and dates as the exact strings stored in
//! the target store. The comparators do exact, case-sensitive equality on
//! these strings — a date stored in a different rendering is drift.

use serde::{Deserialize, Serialize};

/// Outcome of a by-id lookup in the target store.
///
/// "No row" and "row present but unreadable" are distinct outcomes so they
/// stay observable in logs and tests, but the engine treats both as absence:
/// the legacy record is inserted fresh either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLookup<T> {
    /// A row exists and parsed cleanly.
    Found(T),
    /// No row with the requested id.
    Absent,
    /// A row exists but could not be read; the reason is carried for logs.
    Unreadable(String),
}

impl<T> RowLookup<T> {
    /// Returns true if a row was found and parsed.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, RowLookup::Found(_))
    }

    /// Converts to an `Option`, discarding the absence reason.
    pub fn found(self) -> Option<T> {
        match self {
            RowLookup::Found(row) => Some(row),
            RowLookup::Absent | RowLookup::Unreadable(_) => None,
        }
    }

    /// Maps the found row, preserving the other outcomes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RowLookup<U> {
        match self {
            RowLookup::Found(row) => RowLookup::Found(f(row)),
            RowLookup::Absent => RowLookup::Absent,
            RowLookup::Unreadable(reason) => RowLookup::Unreadable(reason),
        }
    }
}

/// A row of the target `vets` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A row of the target `owners` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// A row of the target `pets` table. The type is stored by id; the gateway
/// resolves it to a name on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRow {
    pub id: i64,
    pub name: String,
    pub birth_date: String,
    pub type_id: i64,
    pub owner_id: i64,
}

/// A row of the target `visits` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRow {
    pub id: i64,
    pub pet_id: i64,
    pub visit_date: String,
    pub description: String,
}
