#![allow(dead_code)]

use chrono::NaiveDate;
use clinicsync_domain::{
    Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Vet, VetId, Visit, VisitId,
};
use clinicsync_gateway::{OwnerRow, PetRow, VetRow, VisitRow};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn vet(id: i64, first: &str, last: &str) -> Vet {
    Vet::new(VetId::new(id), first, last)
}

/// The target row a correct reconciliation of `vet` produces.
pub fn vet_row(vet: &Vet) -> VetRow {
    VetRow {
        id: vet.id.value(),
        first_name: vet.first_name.clone(),
        last_name: vet.last_name.clone(),
    }
}

pub fn owner(id: i64, first: &str, last: &str, address: &str, city: &str, phone: &str) -> Owner {
    Owner::new(OwnerId::new(id), first, last, address, city, phone)
}

pub fn owner_row(owner: &Owner) -> OwnerRow {
    OwnerRow {
        id: owner.id.value(),
        first_name: owner.first_name.clone(),
        last_name: owner.last_name.clone(),
        address: owner.address.clone(),
        city: owner.city.clone(),
        telephone: owner.telephone.clone(),
    }
}

pub fn pet(id: i64, name: &str, birth: NaiveDate, type_id: i64, type_name: &str, owner_id: i64) -> Pet {
    Pet::new(
        PetId::new(id),
        name,
        birth,
        PetType::new(PetTypeId::new(type_id), type_name),
        OwnerId::new(owner_id),
    )
}

pub fn pet_row(pet: &Pet) -> PetRow {
    PetRow {
        id: pet.id.value(),
        name: pet.name.clone(),
        birth_date: pet.birth_date.to_string(),
        type_id: pet.pet_type.id.value(),
        owner_id: pet.owner_id.value(),
    }
}

pub fn visit(id: i64, pet_id: i64, date: NaiveDate, description: &str) -> Visit {
    Visit::new(VisitId::new(id), PetId::new(pet_id), date, description)
}

pub fn visit_row(visit: &Visit) -> VisitRow {
    VisitRow {
        id: visit.id.value(),
        pet_id: visit.pet_id.value(),
        visit_date: visit.date.to_string(),
        description: visit.description.clone(),
    }
}
