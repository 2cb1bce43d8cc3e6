//! Property tests: one run converges the target store onto the legacy
//! store, and a second run finds nothing to do.

mod common;

use chrono::NaiveDate;
use clinicsync_domain::source::mock::{InMemoryOwners, InMemoryVets};
use clinicsync_domain::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Vet, VetId};
use clinicsync_gateway::mock::MemoryGateway;
use clinicsync_gateway::OwnerRow;
use clinicsync_reconcile::compare::{owner_matches, pet_matches, vet_matches};
use clinicsync_reconcile::{reconcile_owners, reconcile_vets};
use common::owner_row;
use proptest::prelude::*;

fn birth_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn legacy_vets() -> impl Strategy<Value = Vec<Vet>> {
    prop::collection::vec(("[A-Za-z]{1,12}", "[A-Za-z]{1,12}"), 0..8).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, (first, last))| Vet::new(VetId::new(i as i64 + 1), first, last))
            .collect()
    })
}

fn legacy_owner() -> impl Strategy<Value = Owner> {
    (
        "[A-Za-z]{1,10}",
        "[A-Za-z]{1,10}",
        "[A-Za-z0-9 .]{1,20}",
        "[A-Za-z]{1,12}",
        "[0-9]{10}",
        prop::collection::vec(("[A-Za-z]{1,10}", birth_date(), "[a-z]{3,8}"), 0..4),
    )
        .prop_map(|(first, last, address, city, phone, pets)| {
            let mut owner = Owner::new(OwnerId::new(1), first, last, address, city, phone);
            for (i, (name, birth, type_name)) in pets.into_iter().enumerate() {
                let id = i as i64 + 1;
                owner.pets.push(Pet::new(
                    PetId::new(id),
                    name,
                    birth,
                    PetType::new(PetTypeId::new(id), type_name),
                    OwnerId::new(1),
                ));
            }
            owner
        })
}

proptest! {
    #[test]
    fn vets_run_converges_and_is_idempotent(vets in legacy_vets()) {
        let source = InMemoryVets::new(vets.clone());
        let gateway = MemoryGateway::new();

        let first = reconcile_vets(&source, &gateway).unwrap();
        prop_assert_eq!(first.created, vets.len() as u64);
        for vet in &vets {
            let row = gateway.vet(vet.id.value()).unwrap();
            prop_assert!(vet_matches(vet, &row));
        }

        let second = reconcile_vets(&source, &gateway).unwrap();
        prop_assert_eq!(second.inconsistencies(), 0);
        prop_assert_eq!(second.failed, 0);
    }

    #[test]
    fn owners_run_converges_and_is_idempotent(owner in legacy_owner()) {
        let source = InMemoryOwners::new(vec![owner.clone()]);
        let gateway = MemoryGateway::new();

        let first = reconcile_owners(&source, &gateway).unwrap();
        prop_assert_eq!(first.owners.created, 1);
        prop_assert_eq!(first.pets.created, owner.pets.len() as u64);

        let row = gateway.owner(1).unwrap();
        prop_assert!(owner_matches(&owner, &row));
        for pet in &owner.pets {
            let row = gateway.pet(pet.id.value()).unwrap();
            let type_name = gateway.type_name(row.type_id).unwrap();
            prop_assert!(pet_matches(pet, &row, &type_name));
        }

        let second = reconcile_owners(&source, &gateway).unwrap();
        prop_assert_eq!(second.owners.inconsistencies(), 0);
        prop_assert_eq!(second.pets.inconsistencies(), 0);
    }

    #[test]
    fn stale_owner_row_is_fully_replaced(owner in legacy_owner(), stale_city in "[A-Za-z]{1,12}") {
        let source = InMemoryOwners::new(vec![owner.clone()]);
        let gateway = MemoryGateway::new();
        gateway.seed_owner(OwnerRow {
            city: stale_city.clone(),
            ..owner_row(&owner)
        });

        let report = reconcile_owners(&source, &gateway).unwrap();

        let expect_updated = u64::from(stale_city != owner.city);
        prop_assert_eq!(report.owners.updated, expect_updated);
        prop_assert_eq!(report.owners.created, 0);
        prop_assert!(owner_matches(&owner, &gateway.owner(1).unwrap()));
    }
}
