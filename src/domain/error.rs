//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rejected records and rejected selections.
///
/// Empty lookups and empty recommendation sets are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid place '{name}': {reason}")]
    InvalidPlace { name: String, reason: String },

    #[error("unknown place: {0}")]
    UnknownPlace(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}
