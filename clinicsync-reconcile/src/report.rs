//! Per-run tallies and their plain-text summaries.

use serde::{Deserialize, Serialize};

/// Tallies for one reconciliation run over one entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounts {
    /// Records missing from the target store and inserted fresh.
    pub created: u64,
    /// Divergent records replaced (delete then insert).
    pub updated: u64,
    /// Detected repairs whose delete or insert was rejected by the store.
    /// These are not inconsistencies repaired; the next run re-detects them.
    pub failed: u64,
}

impl RunCounts {
    /// Number of inconsistencies this run repaired.
    #[must_use]
    pub fn inconsistencies(&self) -> u64 {
        self.created + self.updated
    }

    /// Folds another run's tallies into this one.
    pub fn merge(&mut self, other: RunCounts) {
        self.created += other.created;
        self.updated += other.updated;
        self.failed += other.failed;
    }

    /// Two-line report for operational dashboards, e.g.
    /// `"Number of created vets: 2\nNumber of updated vets: 1"`.
    #[must_use]
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Number of created {noun}: {}\nNumber of updated {noun}: {}",
            self.created, self.updated
        )
    }
}

/// Combined tallies for an owners run: owners and their pets are reconciled
/// in the same pass but tallied separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnersReport {
    pub owners: RunCounts,
    pub pets: RunCounts,
}

impl OwnersReport {
    /// Number of inconsistencies this run repaired, across both tallies.
    #[must_use]
    pub fn inconsistencies(&self) -> u64 {
        self.owners.inconsistencies() + self.pets.inconsistencies()
    }

    /// Four-line report covering owners and pets.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.owners.summary("owners"), self.pets.summary("pets"))
    }
}
