use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{OwnerId, PetId, PetTypeId};

/// A pet type ("cat", "dog", ...). The legacy store keeps types in their
/// own table; the target store resolves a pet's type id back to this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
}

impl PetType {
    /// Creates a pet type.
    pub fn new(id: PetTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A pet as read from the legacy store. Pets are owned child records and
/// are only reachable through their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    pub owner_id: OwnerId,
}

impl Pet {
    /// Creates a pet record.
    pub fn new(
        id: PetId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        pet_type: PetType,
        owner_id: OwnerId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
            pet_type,
            owner_id,
        }
    }
}

/// A pet owner as read from the legacy store, with their pets in legacy
/// fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Creates an owner record with no pets.
    pub fn new(
        id: OwnerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
            pets: Vec::new(),
        }
    }

    /// Adds a pet to this owner (builder style).
    #[must_use]
    pub fn with_pet(mut self, pet: Pet) -> Self {
        self.pets.push(pet);
        self
    }
}
