//! Legacy read ports.
//!
//! The reconciliation engine never talks to the legacy ORM directly; it
//! pulls whole collections through these traits. Implementations live in
//! the application wiring. Pets have no port of their own — they are read
//! transitively through `Owner::pets`.

use thiserror::Error;

use crate::{Owner, Vet, Visit};

/// Result type for legacy read-port operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised by a legacy read port.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The legacy store could not be reached.
    #[error("legacy store unavailable: {0}")]
    Unavailable(String),

    /// A legacy record could not be mapped into a domain object.
    #[error("malformed legacy record: {0}")]
    Malformed(String),
}

/// Read port over the legacy vets table.
pub trait VetSource: Send + Sync {
    /// Returns every vet in legacy fetch order. The whole collection is
    /// pulled into memory; there is no pagination.
    fn find_all(&self) -> SourceResult<Vec<Vet>>;
}

/// Read port over the legacy owners table (pets included).
pub trait OwnerSource: Send + Sync {
    /// Returns every owner, each carrying its pets, in legacy fetch order.
    fn find_all(&self) -> SourceResult<Vec<Owner>>;
}

/// Read port over the legacy visits table.
pub trait VisitSource: Send + Sync {
    /// Returns every visit in legacy fetch order.
    fn find_all(&self) -> SourceResult<Vec<Visit>>;
}

/// In-memory read ports for testing.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// A vet source backed by a vector, with a failure toggle.
    #[derive(Debug, Default)]
    pub struct InMemoryVets {
        records: Vec<Vet>,
        fail: Mutex<bool>,
    }

    impl InMemoryVets {
        /// Creates a source returning the given vets.
        pub fn new(records: Vec<Vet>) -> Self {
            Self {
                records,
                fail: Mutex::new(false),
            }
        }

        /// Makes every subsequent `find_all` fail.
        pub fn set_unavailable(&self) {
            *self.fail.lock().unwrap() = true;
        }
    }

    impl VetSource for InMemoryVets {
        fn find_all(&self) -> SourceResult<Vec<Vet>> {
            if *self.fail.lock().unwrap() {
                return Err(SourceError::Unavailable("vets offline".into()));
            }
            Ok(self.records.clone())
        }
    }

    /// An owner source backed by a vector, with a failure toggle.
    #[derive(Debug, Default)]
    pub struct InMemoryOwners {
        records: Vec<Owner>,
        fail: Mutex<bool>,
    }

    impl InMemoryOwners {
        /// Creates a source returning the given owners.
        pub fn new(records: Vec<Owner>) -> Self {
            Self {
                records,
                fail: Mutex::new(false),
            }
        }

        /// Makes every subsequent `find_all` fail.
        pub fn set_unavailable(&self) {
            *self.fail.lock().unwrap() = true;
        }
    }

    impl OwnerSource for InMemoryOwners {
        fn find_all(&self) -> SourceResult<Vec<Owner>> {
            if *self.fail.lock().unwrap() {
                return Err(SourceError::Unavailable("owners offline".into()));
            }
            Ok(self.records.clone())
        }
    }

    /// A visit source backed by a vector, with a failure toggle.
    #[derive(Debug, Default)]
    pub struct InMemoryVisits {
        records: Vec<Visit>,
        fail: Mutex<bool>,
    }

    impl InMemoryVisits {
        /// Creates a source returning the given visits.
        pub fn new(records: Vec<Visit>) -> Self {
            Self {
                records,
                fail: Mutex::new(false),
            }
        }

        /// Makes every subsequent `find_all` fail.
        pub fn set_unavailable(&self) {
            *self.fail.lock().unwrap() = true;
        }
    }

    impl VisitSource for InMemoryVisits {
        fn find_all(&self) -> SourceResult<Vec<Visit>> {
            if *self.fail.lock().unwrap() {
                return Err(SourceError::Unavailable("visits offline".into()));
            }
            Ok(self.records.clone())
        }
    }
}
