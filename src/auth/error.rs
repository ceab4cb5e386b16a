// Sheetkey — Auth error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read service account key file '{path}': {reason}")]
    KeyFile { path: String, reason: String },

    #[error("Malformed service account key: {0}")]
    MalformedKey(String),

    #[error("No ambient platform credentials available")]
    NoAmbientCredentials,

    #[error("Hosted-notebook authentication is not available in this environment")]
    NotebookUnavailable,

    #[error("No credential provider produced transport credentials")]
    Exhausted,
}
