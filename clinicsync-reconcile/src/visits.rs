//! Visits reconciler.

use clinicsync_domain::VisitSource;
use clinicsync_gateway::{RowLookup, Table, TableGateway};
use tracing::{error, info, warn};

use crate::compare;
use crate::error::{ReconcileError, ReconcileResult};
use crate::report::RunCounts;

/// Reconciles every legacy visit against the target `visits` table.
///
/// Same algorithm as the vets check; visit dates compare as the exact
/// stored string, so a differently-rendered date is drift.
pub fn reconcile_visits(
    source: &dyn VisitSource,
    gateway: &dyn TableGateway,
) -> ReconcileResult<RunCounts> {
    let mut counts = RunCounts::default();

    for visit in source.find_all()? {
        match gateway.visit_by_id(visit.id) {
            RowLookup::Found(row) => {
                if compare::visit_matches(&visit, &row) {
                    continue;
                }
                if row.id != visit.id.value() {
                    return Err(ReconcileError::IdMismatch {
                        table: Table::Visits,
                        expected: visit.id.value(),
                        found: row.id,
                    });
                }
                let replaced = gateway
                    .delete_by_id(row.id, Table::Visits)
                    .and_then(|()| gateway.insert_visit(&visit));
                match replaced {
                    Ok(()) => counts.updated += 1,
                    Err(e) => {
                        error!("Failed to replace divergent visit {}: {}", visit.id, e);
                        counts.failed += 1;
                    }
                }
            }
            RowLookup::Absent => match gateway.insert_visit(&visit) {
                Ok(()) => counts.created += 1,
                Err(e) => {
                    error!("Failed to insert missing visit {}: {}", visit.id, e);
                    counts.failed += 1;
                }
            },
            RowLookup::Unreadable(reason) => {
                warn!("Visit row {} unreadable ({reason}), re-inserting", visit.id);
                match gateway.insert_visit(&visit) {
                    Ok(()) => counts.created += 1,
                    Err(e) => {
                        error!("Failed to re-insert unreadable visit {}: {}", visit.id, e);
                        counts.failed += 1;
                    }
                }
            }
        }
    }

    info!(
        "Visits check done: {} created, {} updated, {} failed",
        counts.created, counts.updated, counts.failed
    );
    Ok(counts)
}
