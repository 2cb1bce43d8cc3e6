//! Error types for the reconciliation engine.

use clinicsync_domain::SourceError;
use clinicsync_gateway::Table;
use thiserror::Error;

/// Result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Errors that abort a reconciliation run.
///
/// Per-record failures (unreadable rows, rejected writes) never surface
/// here — they are logged, tallied, and the run moves on. Only conditions
/// that make the whole run meaningless abort it.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The legacy read port failed; there is nothing to iterate.
    #[error("legacy read failed: {0}")]
    Source(#[from] SourceError),

    /// The gateway returned a row whose id differs from the requested one.
    /// This is a lookup-contract violation, never repaired silently.
    #[error("target row id {found} does not match legacy id {expected} in table {table}")]
    IdMismatch {
        table: Table,
        expected: i64,
        found: i64,
    },
}
