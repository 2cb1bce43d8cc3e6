//! Legacy-store domain model for ClinicSync.
//!
//! This crate defines the typed records the reconciliation engine reads
//! from the legacy relational store:
//! - Typed integer identifiers (the legacy store is authoritative for ids)
//! - Vet, Owner, Pet, PetType and Visit records
//! - The legacy read-port traits (`VetSource`, `OwnerSource`, `VisitSource`)
//!
//! Records are plain data. All mutation of the legacy store happens in the
//! live application; the engine only ever reads these types.

mod ids;
mod owner;
pub mod source;
mod vet;
mod visit;

pub use ids::{OwnerId, PetId, PetTypeId, VetId, VisitId};
pub use owner::{Owner, Pet, PetType};
pub use source::{OwnerSource, SourceError, SourceResult, VetSource, VisitSource};
pub use vet::Vet;
pub use visit::Visit;
