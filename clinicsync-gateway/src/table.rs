use serde::{Deserialize, Serialize};
use std::fmt;

/// A table in the target store.
///
/// Table identity is typed so a repair cannot delete from a table other
/// than the one being reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Vets,
    Owners,
    Pets,
    Visits,
    /// Pet types (id to name), referenced by rows in `Pets`.
    Types,
}

impl Table {
    /// Returns the table's name in the target store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Table::Vets => "vets",
            Table::Owners => "owners",
            Table::Pets => "pets",
            Table::Visits => "visits",
            Table::Types => "types",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
