//! Vets reconciler.

use clinicsync_domain::VetSource;
use clinicsync_gateway::{RowLookup, Table, TableGateway};
use tracing::{error, info, warn};

use crate::compare;
use crate::error::{ReconcileError, ReconcileResult};
use crate::report::RunCounts;

/// Reconciles every legacy vet against the target `vets` table.
///
/// Records are processed strictly sequentially in legacy fetch order. A
/// rejected write is logged and tallied as `failed`; the run continues
/// with the next record.
pub fn reconcile_vets(
    source: &dyn VetSource,
    gateway: &dyn TableGateway,
) -> ReconcileResult<RunCounts> {
    let mut counts = RunCounts::default();

    for vet in source.find_all()? {
        match gateway.vet_by_id(vet.id) {
            RowLookup::Found(row) => {
                if compare::vet_matches(&vet, &row) {
                    continue;
                }
                if row.id != vet.id.value() {
                    return Err(ReconcileError::IdMismatch {
                        table: Table::Vets,
                        expected: vet.id.value(),
                        found: row.id,
                    });
                }
                let replaced = gateway
                    .delete_by_id(row.id, Table::Vets)
                    .and_then(|()| gateway.insert_vet(&vet));
                match replaced {
                    Ok(()) => counts.updated += 1,
                    Err(e) => {
                        error!("Failed to replace divergent vet {}: {}", vet.id, e);
                        counts.failed += 1;
                    }
                }
            }
            RowLookup::Absent => match gateway.insert_vet(&vet) {
                Ok(()) => counts.created += 1,
                Err(e) => {
                    error!("Failed to insert missing vet {}: {}", vet.id, e);
                    counts.failed += 1;
                }
            },
            RowLookup::Unreadable(reason) => {
                warn!("Vet row {} unreadable ({reason}), re-inserting", vet.id);
                match gateway.insert_vet(&vet) {
                    Ok(()) => counts.created += 1,
                    Err(e) => {
                        error!("Failed to re-insert unreadable vet {}: {}", vet.id, e);
                        counts.failed += 1;
                    }
                }
            }
        }
    }

    info!(
        "Vets check done: {} created, {} updated, {} failed",
        counts.created, counts.updated, counts.failed
    );
    Ok(counts)
}
