// Sheetkey — Tabular store interface
//
// Abstraction over the remote spreadsheet client, enabling real network
// implementations and in-memory mocks for testing. The store's search
// primitive matches a value against the whole table and reports (row, col)
// positions, not records — row-level equality is reconstructed upstream by
// intersecting column scans.

use super::TransportError;
use crate::auth::AccessCredentials;

/// Position of a matched cell in the backing table. Rows and columns are
/// 1-based, following the remote store's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// One worksheet of an open spreadsheet document.
///
/// Row positions are NOT stable identifiers: they shift on insert and
/// delete. Callers must re-derive positions immediately before each
/// mutation and never retain them across separate calls.
pub trait Worksheet {
    /// Whole-table exact-match search; returns the position of every cell
    /// whose value equals `value`.
    fn find_all(&self, value: &str) -> Result<Vec<CellRef>, TransportError>;

    /// Read a single cell.
    fn cell(&self, row: usize, col: usize) -> Result<String, TransportError>;

    /// Overwrite a single cell.
    fn update_cell(&mut self, row: usize, col: usize, value: &str) -> Result<(), TransportError>;

    /// Insert a new row at `index`, shifting that row and everything below
    /// it down by one.
    fn insert_row(&mut self, index: usize, values: &[String]) -> Result<(), TransportError>;

    /// Delete the row at `row`, shifting everything below it up by one.
    fn delete_row(&mut self, row: usize) -> Result<(), TransportError>;
}

/// An authorized session with the remote spreadsheet service.
///
/// Every `open_*` method (and `create`) returns the document's first
/// worksheet — the only one this system uses.
pub trait SheetsClient: Sized {
    type Sheet: Worksheet;

    /// Establish an authorized session from transport credentials.
    fn authorize(credentials: &AccessCredentials) -> Result<Self, TransportError>;

    /// Open a document by its key (the stable identifier in its URL).
    fn open_by_key(&self, key: &str) -> Result<Self::Sheet, TransportError>;

    /// Open a document by its full URL.
    fn open_by_url(&self, url: &str) -> Result<Self::Sheet, TransportError>;

    /// Open a document by title.
    fn open_by_title(&self, title: &str) -> Result<Self::Sheet, TransportError>;

    /// Create a new document with the given title.
    fn create(&self, title: &str) -> Result<Self::Sheet, TransportError>;
}
