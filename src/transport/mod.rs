// Sheetkey — Transport Module
//
// The interface boundary to the remote tabular store. Every call is an
// opaque, blocking network round trip; this layer imposes no timeouts,
// retries, or concurrency of its own.

mod error;
mod sheet;

#[cfg(test)]
pub mod mock;

pub use error::TransportError;
pub use sheet::{CellRef, SheetsClient, Worksheet};
