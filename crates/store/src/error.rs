//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored data is structurally invalid for its key.
    #[error("corrupt data for key {key}: {reason}")]
    Corrupt {
        /// Storage key the data was read from.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}
