//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using client storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a storage operation.
    #[error("Storage operation failed: {0}")]
    BackendError(String),

    /// Key not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}
