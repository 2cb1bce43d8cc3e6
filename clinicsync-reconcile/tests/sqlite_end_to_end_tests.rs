//! The full checker running against the real SQLite gateway.

mod common;

use clinicsync_domain::source::mock::{InMemoryOwners, InMemoryVets, InMemoryVisits};
use clinicsync_domain::{OwnerId, PetId, VetId, VisitId};
use clinicsync_gateway::{RowLookup, SqliteTableGateway, TableGateway};
use clinicsync_reconcile::ConsistencyChecker;
use common::{date, owner, pet, vet, visit};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn legacy_checker(gateway: Arc<SqliteTableGateway>) -> ConsistencyChecker {
    let vets = vec![vet(1, "James", "Carter"), vet(2, "Helen", "Leary")];
    let owners = vec![
        owner(1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023")
            .with_pet(pet(1, "Leo", date(2010, 9, 7), 1, "cat", 1))
            .with_pet(pet(2, "Basil", date(2012, 8, 6), 2, "hamster", 1)),
        owner(2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ];
    let visits = vec![
        visit(7, 1, date(2023, 1, 5), "Checkup"),
        visit(8, 2, date(2023, 3, 12), "Shots"),
    ];

    ConsistencyChecker::new(
        Arc::new(InMemoryVets::new(vets)),
        Arc::new(InMemoryOwners::new(owners)),
        Arc::new(InMemoryVisits::new(visits)),
        gateway,
    )
}

#[test]
fn first_run_populates_an_empty_target_store() {
    init_logging();
    let gateway = Arc::new(SqliteTableGateway::open_in_memory().unwrap());
    let checker = legacy_checker(Arc::clone(&gateway));

    assert_eq!(
        checker.check_vets().unwrap(),
        "Number of created vets: 2\nNumber of updated vets: 0"
    );
    assert_eq!(
        checker.check_owners().unwrap(),
        "Number of created owners: 2\nNumber of updated owners: 0\n\
         Number of created pets: 2\nNumber of updated pets: 0"
    );
    assert_eq!(
        checker.check_visits().unwrap(),
        "Number of created visits: 2\nNumber of updated visits: 0"
    );
    assert_eq!(checker.inconsistency(), 8);

    // Spot-check the written rows through the gateway itself.
    let leo = match gateway.pet_by_id(PetId::new(1)) {
        RowLookup::Found(row) => row,
        other => panic!("expected Leo's row, got {other:?}"),
    };
    assert_eq!(leo.name, "Leo");
    assert_eq!(leo.birth_date, "2010-09-07");
    assert_eq!(leo.owner_id, 1);
    match gateway.pet_type_name(clinicsync_domain::PetTypeId::new(2)) {
        RowLookup::Found(name) => assert_eq!(name, "hamster"),
        other => panic!("expected type name, got {other:?}"),
    }
    let checkup = match gateway.visit_by_id(VisitId::new(7)) {
        RowLookup::Found(row) => row,
        other => panic!("expected visit row, got {other:?}"),
    };
    assert_eq!(checkup.visit_date, "2023-01-05");
    assert_eq!(checkup.description, "Checkup");
}

#[test]
fn second_run_finds_nothing_to_repair() {
    init_logging();
    let gateway = Arc::new(SqliteTableGateway::open_in_memory().unwrap());
    let checker = legacy_checker(Arc::clone(&gateway));

    checker.check_vets().unwrap();
    checker.check_owners().unwrap();
    checker.check_visits().unwrap();
    let after_first = checker.inconsistency();

    assert_eq!(
        checker.check_vets().unwrap(),
        "Number of created vets: 0\nNumber of updated vets: 0"
    );
    assert_eq!(
        checker.check_owners().unwrap(),
        "Number of created owners: 0\nNumber of updated owners: 0\n\
         Number of created pets: 0\nNumber of updated pets: 0"
    );
    assert_eq!(
        checker.check_visits().unwrap(),
        "Number of created visits: 0\nNumber of updated visits: 0"
    );
    assert_eq!(checker.inconsistency(), after_first);
}

#[test]
fn reconciliation_converges_across_process_restarts() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target.db");

    {
        let gateway = Arc::new(SqliteTableGateway::open(&path).unwrap());
        let checker = legacy_checker(gateway);
        checker.check_vets().unwrap();
        checker.check_owners().unwrap();
        checker.check_visits().unwrap();
    }

    // A fresh process reopening the same store finds it already consistent.
    let gateway = Arc::new(SqliteTableGateway::open(&path).unwrap());
    let checker = legacy_checker(gateway);
    checker.check_vets().unwrap();
    checker.check_owners().unwrap();
    checker.check_visits().unwrap();
    assert_eq!(checker.inconsistency(), 0);
}

#[test]
fn drift_seeded_through_the_gateway_is_repaired() {
    init_logging();
    let gateway = Arc::new(SqliteTableGateway::open_in_memory().unwrap());

    // The target store holds a stale copy of George (old city) and a stale
    // vet surname from before a correction in the legacy store.
    gateway
        .insert_owner(&owner(1, "George", "Franklin", "110 W. Liberty St.", "Springfield", "6085551023"))
        .unwrap();
    gateway.insert_vet(&vet(2, "Helen", "Learie")).unwrap();

    let checker = legacy_checker(Arc::clone(&gateway));
    checker.check_vets().unwrap();
    let owners_summary = checker.check_owners().unwrap();

    assert_eq!(
        owners_summary,
        "Number of created owners: 1\nNumber of updated owners: 1\n\
         Number of created pets: 2\nNumber of updated pets: 0"
    );
    match gateway.owner_by_id(OwnerId::new(1)) {
        RowLookup::Found(row) => assert_eq!(row.city, "Madison"),
        other => panic!("expected repaired owner, got {other:?}"),
    }
    match gateway.vet_by_id(VetId::new(2)) {
        RowLookup::Found(row) => assert_eq!(row.last_name, "Leary"),
        other => panic!("expected repaired vet, got {other:?}"),
    }
}
