//! The gateway contract the reconciliation engine consumes.

use clinicsync_domain::{Owner, OwnerId, Pet, PetId, PetTypeId, Vet, VetId, Visit, VisitId};

use crate::error::GatewayResult;
use crate::row::{OwnerRow, PetRow, RowLookup, VetRow, VisitRow};
use crate::table::Table;

/// Uniform data-access surface over the target store.
///
/// One lookup method per table, one typed insert per entity, and a single
/// delete keyed by raw id and table. Rows are keyed purely by id within
/// their table: inserting over an existing id overwrites that row, which
/// is what lets an unreadable row be repaired by a plain insert. Deletion
/// is only ever the first half of a replace — the engine never deletes
/// without re-inserting.
pub trait TableGateway: Send + Sync {
    /// Looks up a vet row by id.
    fn vet_by_id(&self, id: VetId) -> RowLookup<VetRow>;

    /// Looks up an owner row by id.
    fn owner_by_id(&self, id: OwnerId) -> RowLookup<OwnerRow>;

    /// Looks up a pet row by id.
    fn pet_by_id(&self, id: PetId) -> RowLookup<PetRow>;

    /// Looks up a visit row by id.
    fn visit_by_id(&self, id: VisitId) -> RowLookup<VisitRow>;

    /// Resolves a pet-type id to its name.
    fn pet_type_name(&self, id: PetTypeId) -> RowLookup<String>;

    /// Deletes the row with the given id from a table. Deleting a missing
    /// row is a no-op, not an error.
    fn delete_by_id(&self, id: i64, table: Table) -> GatewayResult<()>;

    /// Inserts a vet translated into a target row.
    fn insert_vet(&self, vet: &Vet) -> GatewayResult<()>;

    /// Inserts an owner translated into a target row. The owner's pets are
    /// not touched; they are separate repair units.
    fn insert_owner(&self, owner: &Owner) -> GatewayResult<()>;

    /// Inserts a pet translated into a target row, registering its type
    /// (id to name) so later lookups resolve. Registration is an upsert, so
    /// a drifted type name converges with the pet repair.
    fn insert_pet(&self, pet: &Pet) -> GatewayResult<()>;

    /// Inserts a visit translated into a target row.
    fn insert_visit(&self, visit: &Visit) -> GatewayResult<()>;
}
