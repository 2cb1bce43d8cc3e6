//! Consistency-reconciliation engine for the ClinicSync store migration.
//!
//! While the live application dual-writes, this engine proves — and
//! repairs — that the legacy relational store and the new table-oriented
//! target store agree. It reads every record from the legacy store,
//! looks up the matching target row, compares field-by-field, and repairs
//! divergence by replacing the stale row with a fresh copy of the legacy
//! record.
//!
//! # Components
//!
//! - **compare**: pure per-entity field comparators
//! - **vets / owners / visits**: per-entity reconcilers running the shared
//!   fetch-all, look-up, compare, repair loop
//! - **report**: per-run tallies and their plain-text summaries
//! - **checker**: the orchestrator owning the cumulative inconsistency
//!   counter
//!
//! # Per-record algorithm
//!
//! 1. Look the legacy id up in the target table.
//! 2. Missing or unreadable row: insert the legacy record (a creation).
//! 3. Row found and field-equal: nothing to do.
//! 4. Row found and divergent: delete the row that was read back, insert
//!    the legacy record (an update). Old data is replaced, never merged.
//!
//! Processing is strictly sequential and synchronous; repeated runs
//! converge (an already-consistent record is a no-op).
//!
//! # Example
//!
//! ```
//! use clinicsync_domain::source::mock::{InMemoryOwners, InMemoryVets, InMemoryVisits};
//! use clinicsync_domain::{Vet, VetId};
//! use clinicsync_gateway::mock::MemoryGateway;
//! use clinicsync_reconcile::ConsistencyChecker;
//! use std::sync::Arc;
//!
//! let vets = vec![Vet::new(VetId::new(1), "James", "Carter")];
//! let checker = ConsistencyChecker::new(
//!     Arc::new(InMemoryVets::new(vets)),
//!     Arc::new(InMemoryOwners::default()),
//!     Arc::new(InMemoryVisits::default()),
//!     Arc::new(MemoryGateway::new()),
//! );
//!
//! let summary = checker.check_vets()?;
//! assert_eq!(summary, "Number of created vets: 1\nNumber of updated vets: 0");
//! assert_eq!(checker.inconsistency(), 1);
//! # Ok::<(), clinicsync_reconcile::ReconcileError>(())
//! ```

mod checker;
pub mod compare;
mod error;
mod owners;
mod report;
mod vets;
mod visits;

pub use checker::ConsistencyChecker;
pub use error::{ReconcileError, ReconcileResult};
pub use owners::{reconcile_owners, reconcile_pets};
pub use report::{OwnersReport, RunCounts};
pub use vets::reconcile_vets;
pub use visits::reconcile_visits;
