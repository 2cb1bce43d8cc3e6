//! Target-store table data gateway for ClinicSync.
//!
//! The target store is a hand-managed, table-oriented SQLite database: one
//! flat table per entity type, rows keyed purely by the legacy id, no ORM.
//! This crate is the single mutation surface the reconciliation engine uses
//! to repair the target store.
//!
//! # Architecture
//!
//! - **Table**: typed table identity (a repair can only delete from the
//!   table it is reconciling)
//! - **RowLookup**: explicit lookup outcome — found, absent, or present but
//!   unreadable — instead of exception-driven classification
//! - **TableGateway**: the contract the engine consumes
//! - **SqliteTableGateway**: the production implementation; schema is
//!   bootstrapped on open
//! - **mock::MemoryGateway**: in-memory implementation with failure
//!   injection for tests

mod error;
mod gateway;
pub mod mock;
mod row;
mod sqlite;
mod table;

pub use error::{GatewayError, GatewayResult};
pub use gateway::TableGateway;
pub use row::{OwnerRow, PetRow, RowLookup, VetRow, VisitRow};
pub use sqlite::SqliteTableGateway;
pub use table::Table;
