//! Error types for the gateway layer.

use thiserror::Error;

use crate::Table;

/// Result type for gateway write operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur when mutating the target store.
///
/// Lookups never return these — a failed read folds into
/// [`RowLookup::Unreadable`](crate::RowLookup::Unreadable).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A delete or insert was rejected by the store.
    #[error("write failed for {table} id {id}: {reason}")]
    WriteFailed {
        table: Table,
        id: i64,
        reason: String,
    },

    /// The connection lock was poisoned by a panicking thread.
    #[error("connection lock poisoned")]
    LockPoisoned,
}
