//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart store used before its initial load from storage.
    #[error("Cart store not initialized: call init() before mutating")]
    StoreNotInitialized,

    /// Checkout form failed submit validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A payment submission is already in flight.
    #[error("Submission already in flight")]
    SubmissionInFlight,

    /// Checkout already completed; the flow cannot submit again.
    #[error("Checkout already completed")]
    AlreadyCompleted,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] exd_store::StorageError),
}
