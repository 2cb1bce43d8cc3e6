//! Top-level consistency checker.

use clinicsync_domain::{OwnerSource, VetSource, VisitSource};
use clinicsync_gateway::TableGateway;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ReconcileResult;
use crate::owners::reconcile_owners;
use crate::vets::reconcile_vets;
use crate::visits::reconcile_visits;

/// Dispatches the per-entity reconcilers and keeps the cumulative
/// inconsistency count across runs.
///
/// The counter only grows as checks run; it is reset solely through
/// [`set_inconsistency`](Self::set_inconsistency). The three checks touch
/// disjoint tables and may be invoked concurrently by the caller, which is
/// why the counter is atomic. No scheduling lives here — callers decide
/// when and how often to check.
pub struct ConsistencyChecker {
    vets: Arc<dyn VetSource>,
    owners: Arc<dyn OwnerSource>,
    visits: Arc<dyn VisitSource>,
    gateway: Arc<dyn TableGateway>,
    inconsistency: AtomicU64,
}

impl ConsistencyChecker {
    /// Creates a checker over the given legacy read ports and target-store
    /// gateway.
    pub fn new(
        vets: Arc<dyn VetSource>,
        owners: Arc<dyn OwnerSource>,
        visits: Arc<dyn VisitSource>,
        gateway: Arc<dyn TableGateway>,
    ) -> Self {
        Self {
            vets,
            owners,
            visits,
            gateway,
            inconsistency: AtomicU64::new(0),
        }
    }

    /// Runs the vets check end-to-end and returns its two-line summary.
    pub fn check_vets(&self) -> ReconcileResult<String> {
        let counts = reconcile_vets(self.vets.as_ref(), self.gateway.as_ref())?;
        self.inconsistency
            .fetch_add(counts.inconsistencies(), Ordering::Relaxed);
        Ok(counts.summary("vets"))
    }

    /// Runs the owners+pets check end-to-end and returns its four-line
    /// summary.
    pub fn check_owners(&self) -> ReconcileResult<String> {
        let report = reconcile_owners(self.owners.as_ref(), self.gateway.as_ref())?;
        self.inconsistency
            .fetch_add(report.inconsistencies(), Ordering::Relaxed);
        Ok(report.summary())
    }

    /// Runs the visits check end-to-end and returns its two-line summary.
    pub fn check_visits(&self) -> ReconcileResult<String> {
        let counts = reconcile_visits(self.visits.as_ref(), self.gateway.as_ref())?;
        self.inconsistency
            .fetch_add(counts.inconsistencies(), Ordering::Relaxed);
        Ok(counts.summary("visits"))
    }

    /// The cumulative inconsistency count across all completed runs.
    pub fn inconsistency(&self) -> u64 {
        self.inconsistency.load(Ordering::Relaxed)
    }

    /// Overwrites the cumulative count (external reset, test setup).
    pub fn set_inconsistency(&self, value: u64) {
        self.inconsistency.store(value, Ordering::Relaxed);
    }
}
