//! Field comparators.
//!
//! Pure equality checks between a legacy record and its raw target-row
//! projection. Comparison is exact and case-sensitive on every field; dates
//! compare as the exact `%Y-%m-%d` rendering, so a row holding the same
//! date in another format is drift. Row ids are not compared here — id
//! agreement is the lookup contract, checked by the reconcilers.

use clinicsync_domain::{Owner, Pet, Vet, Visit};
use clinicsync_gateway::{OwnerRow, PetRow, VetRow, VisitRow};

/// Returns true if the target vet row agrees with the legacy vet.
#[must_use]
pub fn vet_matches(vet: &Vet, row: &VetRow) -> bool {
    vet.first_name == row.first_name && vet.last_name == row.last_name
}

/// Returns true if the target owner row agrees with the legacy owner.
/// Pets are separate repair units and are not considered here.
#[must_use]
pub fn owner_matches(owner: &Owner, row: &OwnerRow) -> bool {
    owner.first_name == row.first_name
        && owner.last_name == row.last_name
        && owner.address == row.address
        && owner.city == row.city
        && owner.telephone == row.telephone
}

/// Returns true if the target pet row agrees with the legacy pet.
/// `type_name` is the row's type id already resolved through the gateway.
#[must_use]
pub fn pet_matches(pet: &Pet, row: &PetRow, type_name: &str) -> bool {
    pet.name == row.name
        && pet.birth_date.to_string() == row.birth_date
        && pet.pet_type.name == type_name
        && pet.owner_id.value() == row.owner_id
}

/// Returns true if the target visit row agrees with the legacy visit.
#[must_use]
pub fn visit_matches(visit: &Visit, row: &VisitRow) -> bool {
    visit.pet_id.value() == row.pet_id
        && visit.date.to_string() == row.visit_date
        && visit.description == row.description
}
