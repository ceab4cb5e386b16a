// Sheetkey — Store Module
//
// The layer that makes a slow, non-atomic, row-oriented remote table behave
// acceptably as a key-value credential store: a short-lived read-through
// cache, idempotent upsert semantics, and a row-finding protocol that
// tolerates duplicate or stale rows.

mod adapter;
mod backend;
mod cache;
mod clock;
mod error;
mod locator;

pub use backend::{CredentialBackend, SheetKeyring};
pub use error::StoreError;
