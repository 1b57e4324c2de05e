//! Store error types.

use thiserror::Error;
use uuid::Uuid;

/// Expense store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(Uuid),

    /// The durable blob could not be read or written.
    #[error("Blob I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The durable blob could not be serialized or deserialized.
    #[error("Blob serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
