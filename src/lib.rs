// Sheetkey — Library root
//
// Re-exports the auth, transport, and store modules.

pub mod auth;
pub mod error;
pub mod store;
pub mod transport;

pub use error::{Result, SheetkeyError};
pub use store::{CredentialBackend, SheetKeyring};
