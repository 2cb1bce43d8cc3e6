//! An in-memory table gateway for testing.
//!
//! Behaves like the SQLite gateway but keeps rows in hash maps and lets
//! tests script failure modes: individual rows can be marked unreadable,
//! and writes to individual ids can be made to fail.

use clinicsync_domain::{Owner, OwnerId, Pet, PetId, PetTypeId, Vet, VetId, Visit, VisitId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::TableGateway;
use crate::row::{OwnerRow, PetRow, RowLookup, VetRow, VisitRow};
use crate::table::Table;

#[derive(Debug, Default)]
struct State {
    vets: HashMap<i64, VetRow>,
    owners: HashMap<i64, OwnerRow>,
    pets: HashMap<i64, PetRow>,
    visits: HashMap<i64, VisitRow>,
    types: HashMap<i64, String>,
    unreadable: HashSet<(Table, i64)>,
    failing_writes: HashSet<(Table, i64)>,
}

/// Scriptable in-memory gateway.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<State>,
}

impl MemoryGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding ──────────────────────────────────────────────────

    /// Seeds a vet row.
    pub fn seed_vet(&self, row: VetRow) {
        self.state.lock().unwrap().vets.insert(row.id, row);
    }

    /// Seeds an owner row.
    pub fn seed_owner(&self, row: OwnerRow) {
        self.state.lock().unwrap().owners.insert(row.id, row);
    }

    /// Seeds a pet row.
    pub fn seed_pet(&self, row: PetRow) {
        self.state.lock().unwrap().pets.insert(row.id, row);
    }

    /// Seeds a visit row.
    pub fn seed_visit(&self, row: VisitRow) {
        self.state.lock().unwrap().visits.insert(row.id, row);
    }

    /// Registers a pet type name.
    pub fn seed_pet_type(&self, id: i64, name: impl Into<String>) {
        self.state.lock().unwrap().types.insert(id, name.into());
    }

    /// Seeds a vet row under an arbitrary key, so lookups can return a row
    /// whose own id disagrees with the id asked for (a lookup-contract
    /// violation the engine must refuse to repair).
    pub fn seed_vet_under(&self, key: i64, row: VetRow) {
        self.state.lock().unwrap().vets.insert(key, row);
    }

    // ── Failure injection ────────────────────────────────────────

    /// Makes lookups of the given row report `Unreadable`.
    pub fn mark_unreadable(&self, table: Table, id: i64) {
        self.state.lock().unwrap().unreadable.insert((table, id));
    }

    /// Makes deletes and inserts touching the given id fail.
    pub fn fail_writes(&self, table: Table, id: i64) {
        self.state.lock().unwrap().failing_writes.insert((table, id));
    }

    // ── Read-back for assertions ─────────────────────────────────

    /// Returns the stored vet row, if any.
    pub fn vet(&self, id: i64) -> Option<VetRow> {
        self.state.lock().unwrap().vets.get(&id).cloned()
    }

    /// Returns the stored owner row, if any.
    pub fn owner(&self, id: i64) -> Option<OwnerRow> {
        self.state.lock().unwrap().owners.get(&id).cloned()
    }

    /// Returns the stored pet row, if any.
    pub fn pet(&self, id: i64) -> Option<PetRow> {
        self.state.lock().unwrap().pets.get(&id).cloned()
    }

    /// Returns the stored visit row, if any.
    pub fn visit(&self, id: i64) -> Option<VisitRow> {
        self.state.lock().unwrap().visits.get(&id).cloned()
    }

    /// Returns the registered type name, if any.
    pub fn type_name(&self, id: i64) -> Option<String> {
        self.state.lock().unwrap().types.get(&id).cloned()
    }

    fn check_write(&self, table: Table, id: i64) -> GatewayResult<()> {
        if self
            .state
            .lock()
            .unwrap()
            .failing_writes
            .contains(&(table, id))
        {
            return Err(GatewayError::WriteFailed {
                table,
                id,
                reason: "injected failure".into(),
            });
        }
        Ok(())
    }

    fn lookup<T: Clone>(&self, table: Table, id: i64, get: impl FnOnce(&State) -> Option<T>) -> RowLookup<T> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(&(table, id)) {
            return RowLookup::Unreadable("injected unreadable row".into());
        }
        match get(&state) {
            Some(row) => RowLookup::Found(row),
            None => RowLookup::Absent,
        }
    }
}

impl TableGateway for MemoryGateway {
    fn vet_by_id(&self, id: VetId) -> RowLookup<VetRow> {
        self.lookup(Table::Vets, id.value(), |s| s.vets.get(&id.value()).cloned())
    }

    fn owner_by_id(&self, id: OwnerId) -> RowLookup<OwnerRow> {
        self.lookup(Table::Owners, id.value(), |s| {
            s.owners.get(&id.value()).cloned()
        })
    }

    fn pet_by_id(&self, id: PetId) -> RowLookup<PetRow> {
        self.lookup(Table::Pets, id.value(), |s| s.pets.get(&id.value()).cloned())
    }

    fn visit_by_id(&self, id: VisitId) -> RowLookup<VisitRow> {
        self.lookup(Table::Visits, id.value(), |s| {
            s.visits.get(&id.value()).cloned()
        })
    }

    fn pet_type_name(&self, id: PetTypeId) -> RowLookup<String> {
        self.lookup(Table::Types, id.value(), |s| {
            s.types.get(&id.value()).cloned()
        })
    }

    fn delete_by_id(&self, id: i64, table: Table) -> GatewayResult<()> {
        self.check_write(table, id)?;
        let mut state = self.state.lock().unwrap();
        match table {
            Table::Vets => {
                state.vets.remove(&id);
            }
            Table::Owners => {
                state.owners.remove(&id);
            }
            Table::Pets => {
                state.pets.remove(&id);
            }
            Table::Visits => {
                state.visits.remove(&id);
            }
            Table::Types => {
                state.types.remove(&id);
            }
        }
        Ok(())
    }

    fn insert_vet(&self, vet: &Vet) -> GatewayResult<()> {
        self.check_write(Table::Vets, vet.id.value())?;
        self.seed_vet(VetRow {
            id: vet.id.value(),
            first_name: vet.first_name.clone(),
            last_name: vet.last_name.clone(),
        });
        Ok(())
    }

    fn insert_owner(&self, owner: &Owner) -> GatewayResult<()> {
        self.check_write(Table::Owners, owner.id.value())?;
        self.seed_owner(OwnerRow {
            id: owner.id.value(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        });
        Ok(())
    }

    fn insert_pet(&self, pet: &Pet) -> GatewayResult<()> {
        self.check_write(Table::Pets, pet.id.value())?;
        self.seed_pet_type(pet.pet_type.id.value(), pet.pet_type.name.clone());
        self.seed_pet(PetRow {
            id: pet.id.value(),
            name: pet.name.clone(),
            birth_date: pet.birth_date.to_string(),
            type_id: pet.pet_type.id.value(),
            owner_id: pet.owner_id.value(),
        });
        Ok(())
    }

    fn insert_visit(&self, visit: &Visit) -> GatewayResult<()> {
        self.check_write(Table::Visits, visit.id.value())?;
        self.seed_visit(VisitRow {
            id: visit.id.value(),
            pet_id: visit.pet_id.value(),
            visit_date: visit.date.to_string(),
            description: visit.description.clone(),
        });
        Ok(())
    }
}
