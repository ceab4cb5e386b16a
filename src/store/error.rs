// Sheetkey — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open backing spreadsheet: {0}")]
    Init(String),

    #[error("Password not found for service '{service}', user '{username}'")]
    PasswordNotFound { service: String, username: String },
}
