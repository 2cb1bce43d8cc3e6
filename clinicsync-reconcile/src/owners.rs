//! Owners+pets reconciler.
//!
//! Pets are owned children of owners in the legacy model, so one pass over
//! the owners collection reconciles both: for each owner, first every pet
//! that owner holds, then the owner record itself. The two stages are
//! independent repair units — a pet failure never blocks its owner and
//! vice versa — and the pets stage can be invoked on its own.

use clinicsync_domain::{Owner, OwnerSource, PetTypeId};
use clinicsync_gateway::{RowLookup, Table, TableGateway};
use tracing::{error, info, warn};

use crate::compare;
use crate::error::{ReconcileError, ReconcileResult};
use crate::report::{OwnersReport, RunCounts};

/// Reconciles one owner's pets against the target `pets` table.
///
/// The stored type id is resolved to a name through the gateway before
/// comparison; a pet row whose type cannot be resolved is unreadable and
/// is re-inserted like a missing row.
pub fn reconcile_pets(
    owner: &Owner,
    gateway: &dyn TableGateway,
) -> ReconcileResult<RunCounts> {
    let mut counts = RunCounts::default();

    for pet in &owner.pets {
        match gateway.pet_by_id(pet.id) {
            RowLookup::Found(row) => {
                let type_name = match gateway.pet_type_name(PetTypeId::new(row.type_id)) {
                    RowLookup::Found(name) => name,
                    RowLookup::Absent | RowLookup::Unreadable(_) => {
                        warn!(
                            "Pet row {} references unresolvable type {}, re-inserting",
                            pet.id, row.type_id
                        );
                        match gateway.insert_pet(pet) {
                            Ok(()) => counts.created += 1,
                            Err(e) => {
                                error!("Failed to re-insert pet {}: {}", pet.id, e);
                                counts.failed += 1;
                            }
                        }
                        continue;
                    }
                };
                if compare::pet_matches(pet, &row, &type_name) {
                    continue;
                }
                if row.id != pet.id.value() {
                    return Err(ReconcileError::IdMismatch {
                        table: Table::Pets,
                        expected: pet.id.value(),
                        found: row.id,
                    });
                }
                let replaced = gateway
                    .delete_by_id(row.id, Table::Pets)
                    .and_then(|()| gateway.insert_pet(pet));
                match replaced {
                    Ok(()) => counts.updated += 1,
                    Err(e) => {
                        error!("Failed to replace divergent pet {}: {}", pet.id, e);
                        counts.failed += 1;
                    }
                }
            }
            RowLookup::Absent => match gateway.insert_pet(pet) {
                Ok(()) => counts.created += 1,
                Err(e) => {
                    error!("Failed to insert missing pet {}: {}", pet.id, e);
                    counts.failed += 1;
                }
            },
            RowLookup::Unreadable(reason) => {
                warn!("Pet row {} unreadable ({reason}), re-inserting", pet.id);
                match gateway.insert_pet(pet) {
                    Ok(()) => counts.created += 1,
                    Err(e) => {
                        error!("Failed to re-insert unreadable pet {}: {}", pet.id, e);
                        counts.failed += 1;
                    }
                }
            }
        }
    }

    Ok(counts)
}

/// Reconciles every legacy owner, pets first, against the target store.
pub fn reconcile_owners(
    source: &dyn OwnerSource,
    gateway: &dyn TableGateway,
) -> ReconcileResult<OwnersReport> {
    let mut report = OwnersReport::default();

    for owner in source.find_all()? {
        report.pets.merge(reconcile_pets(&owner, gateway)?);

        match gateway.owner_by_id(owner.id) {
            RowLookup::Found(row) => {
                if compare::owner_matches(&owner, &row) {
                    continue;
                }
                if row.id != owner.id.value() {
                    return Err(ReconcileError::IdMismatch {
                        table: Table::Owners,
                        expected: owner.id.value(),
                        found: row.id,
                    });
                }
                let replaced = gateway
                    .delete_by_id(row.id, Table::Owners)
                    .and_then(|()| gateway.insert_owner(&owner));
                match replaced {
                    Ok(()) => report.owners.updated += 1,
                    Err(e) => {
                        error!("Failed to replace divergent owner {}: {}", owner.id, e);
                        report.owners.failed += 1;
                    }
                }
            }
            RowLookup::Absent => match gateway.insert_owner(&owner) {
                Ok(()) => report.owners.created += 1,
                Err(e) => {
                    error!("Failed to insert missing owner {}: {}", owner.id, e);
                    report.owners.failed += 1;
                }
            },
            RowLookup::Unreadable(reason) => {
                warn!("Owner row {} unreadable ({reason}), re-inserting", owner.id);
                match gateway.insert_owner(&owner) {
                    Ok(()) => report.owners.created += 1,
                    Err(e) => {
                        error!("Failed to re-insert unreadable owner {}: {}", owner.id, e);
                        report.owners.failed += 1;
                    }
                }
            }
        }
    }

    info!(
        "Owners check done: {} owners created, {} owners updated, {} pets created, {} pets updated",
        report.owners.created, report.owners.updated, report.pets.created, report.pets.updated
    );
    Ok(report)
}
