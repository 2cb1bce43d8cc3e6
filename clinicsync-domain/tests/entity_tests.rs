use chrono::NaiveDate;
use clinicsync_domain::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Vet, VetId, Visit, VisitId};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn vet_constructor_takes_anything_stringy() {
    let vet = Vet::new(VetId::new(1), "James", String::from("Carter"));
    assert_eq!(vet.first_name, "James");
    assert_eq!(vet.last_name, "Carter");
}

#[test]
fn owner_starts_with_no_pets() {
    let owner = Owner::new(OwnerId::new(1), "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023");
    assert!(owner.pets.is_empty());
}

#[test]
fn with_pet_preserves_insertion_order() {
    let cat = PetType::new(PetTypeId::new(1), "cat");
    let owner = Owner::new(OwnerId::new(1), "George", "Franklin", "addr", "Madison", "555")
        .with_pet(Pet::new(PetId::new(1), "Leo", date(2010, 9, 7), cat.clone(), OwnerId::new(1)))
        .with_pet(Pet::new(PetId::new(2), "Basil", date(2012, 8, 6), cat, OwnerId::new(1)));

    let names: Vec<_> = owner.pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Leo", "Basil"]);
}

#[test]
fn dates_render_iso_8601_zero_padded() {
    // The target store compares this rendering byte-for-byte.
    let visit = Visit::new(VisitId::new(7), PetId::new(3), date(2023, 1, 5), "Checkup");
    assert_eq!(visit.date.to_string(), "2023-01-05");

    let pet = Pet::new(
        PetId::new(1),
        "Leo",
        date(2010, 9, 7),
        PetType::new(PetTypeId::new(1), "cat"),
        OwnerId::new(1),
    );
    assert_eq!(pet.birth_date.to_string(), "2010-09-07");
}
