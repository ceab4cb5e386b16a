// Sheetkey — Top-level error types
//
// Aggregates errors from the auth, transport, and store modules into a
// single error enum for the crate boundary. No operation is retried
// internally; every failure is surfaced synchronously to the caller.

use thiserror::Error;

/// Top-level error type for all sheetkey operations.
#[derive(Debug, Error)]
pub enum SheetkeyError {
    #[error("Auth error: {0}")]
    Auth(#[from] crate::auth::AuthError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, SheetkeyError>;
