//! Domain-level errors (no I/O concerns)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy contract.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cycle detected in category hierarchy at id {0}")]
    CycleDetected(u64),

    #[error("unknown category id: {0}")]
    UnknownCategory(u64),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
