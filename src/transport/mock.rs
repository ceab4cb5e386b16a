// Sheetkey — In-memory transport for testing
//
// A deterministic grid standing in for the remote store, so unit tests
// never touch the network. The worksheet records every `find_all` call and
// every cell write, which lets tests assert cache coherence (no extra row
// lookups) and write discipline (created-at is written exactly once).

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use super::sheet::{CellRef, SheetsClient, Worksheet};
use super::TransportError;
use crate::auth::AccessCredentials;

/// Fixed column count of the credential table layout.
const COLS: usize = 5;

// ─── Worksheet ───────────────────────────────────────────────────────────────

pub struct MemoryWorksheet {
    /// All rows including the header; `rows[0]` is table row 1.
    rows: Vec<Vec<String>>,
    /// Number of `find_all` calls issued against this sheet.
    pub find_calls: Cell<usize>,
    /// Every `update_cell` target, in order, as (row, col).
    pub cell_writes: Vec<(usize, usize)>,
    /// Number of `insert_row` calls.
    pub inserts: usize,
}

impl MemoryWorksheet {
    /// A fresh sheet containing only the header row.
    pub fn new() -> Self {
        Self {
            rows: vec![Self::header()],
            find_calls: Cell::new(0),
            cell_writes: Vec::new(),
            inserts: 0,
        }
    }

    /// A sheet pre-populated with the given data rows below the header.
    /// Each row is [service, username, password, created_at, updated_at].
    pub fn with_rows(data: Vec<[&str; COLS]>) -> Self {
        let mut ws = Self::new();
        for row in data {
            ws.rows.push(row.iter().map(|s| s.to_string()).collect());
        }
        ws
    }

    fn header() -> Vec<String> {
        ["service", "username", "password", "created_at", "updated_at"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Total row count, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Inspect a row by its 1-based table position.
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row.checked_sub(1)?).map(|r| r.as_slice())
    }

    fn check_row(&self, row: usize) -> Result<(), TransportError> {
        if row == 0 || row > self.rows.len() {
            return Err(TransportError::RowOutOfBounds(row));
        }
        Ok(())
    }

    fn check_col(col: usize) -> Result<(), TransportError> {
        if col == 0 || col > COLS {
            return Err(TransportError::ColumnOutOfBounds(col));
        }
        Ok(())
    }
}

impl Default for MemoryWorksheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Worksheet for MemoryWorksheet {
    fn find_all(&self, value: &str) -> Result<Vec<CellRef>, TransportError> {
        self.find_calls.set(self.find_calls.get() + 1);
        let mut hits = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell == value {
                    hits.push(CellRef {
                        row: r + 1,
                        col: c + 1,
                    });
                }
            }
        }
        Ok(hits)
    }

    fn cell(&self, row: usize, col: usize) -> Result<String, TransportError> {
        self.check_row(row)?;
        Self::check_col(col)?;
        Ok(self.rows[row - 1][col - 1].clone())
    }

    fn update_cell(&mut self, row: usize, col: usize, value: &str) -> Result<(), TransportError> {
        self.check_row(row)?;
        Self::check_col(col)?;
        self.rows[row - 1][col - 1] = value.to_string();
        self.cell_writes.push((row, col));
        Ok(())
    }

    fn insert_row(&mut self, index: usize, values: &[String]) -> Result<(), TransportError> {
        if index == 0 || index > self.rows.len() + 1 {
            return Err(TransportError::RowOutOfBounds(index));
        }
        let mut row: Vec<String> = values.iter().take(COLS).cloned().collect();
        row.resize(COLS, String::new());
        self.rows.insert(index - 1, row);
        self.inserts += 1;
        Ok(())
    }

    fn delete_row(&mut self, row: usize) -> Result<(), TransportError> {
        self.check_row(row)?;
        self.rows.remove(row - 1);
        Ok(())
    }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Document registry shared between a `MemoryClient` and the test that
/// configured it, so tests can observe creations after the client has been
/// moved into a backend.
#[derive(Default)]
pub struct ClientState {
    pub titles: RefCell<HashSet<String>>,
    pub keys: RefCell<HashSet<String>>,
    pub urls: RefCell<HashSet<String>>,
    pub created: RefCell<Vec<String>>,
}

#[derive(Default)]
pub struct MemoryClient {
    state: Rc<ClientState>,
}

impl MemoryClient {
    /// A client plus a handle onto its document registry.
    pub fn new() -> (Self, Rc<ClientState>) {
        let state = Rc::new(ClientState::default());
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl SheetsClient for MemoryClient {
    type Sheet = MemoryWorksheet;

    fn authorize(_credentials: &AccessCredentials) -> Result<Self, TransportError> {
        Ok(Self::default())
    }

    fn open_by_key(&self, key: &str) -> Result<Self::Sheet, TransportError> {
        if self.state.keys.borrow().contains(key) {
            Ok(MemoryWorksheet::new())
        } else {
            Err(TransportError::DocumentNotFound)
        }
    }

    fn open_by_url(&self, url: &str) -> Result<Self::Sheet, TransportError> {
        if self.state.urls.borrow().contains(url) {
            Ok(MemoryWorksheet::new())
        } else {
            Err(TransportError::DocumentNotFound)
        }
    }

    fn open_by_title(&self, title: &str) -> Result<Self::Sheet, TransportError> {
        if self.state.titles.borrow().contains(title) {
            Ok(MemoryWorksheet::new())
        } else {
            Err(TransportError::DocumentNotFound)
        }
    }

    fn create(&self, title: &str) -> Result<Self::Sheet, TransportError> {
        self.state.titles.borrow_mut().insert(title.to_string());
        self.state.created.borrow_mut().push(title.to_string());
        Ok(MemoryWorksheet::new())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_existing_rows_down() {
        let mut ws = MemoryWorksheet::with_rows(vec![["a", "b", "c", "t", "t"]]);
        ws.insert_row(
            2,
            &["x", "y", "z", "t2", "t2"].map(String::from),
        )
        .unwrap();

        assert_eq!(ws.row_count(), 3);
        assert_eq!(ws.row(2).unwrap()[0], "x", "New row lands at position 2");
        assert_eq!(ws.row(3).unwrap()[0], "a", "Old row 2 shifted to 3");
    }

    #[test]
    fn test_delete_shifts_rows_up() {
        let mut ws = MemoryWorksheet::with_rows(vec![
            ["a", "u", "p", "t", "t"],
            ["b", "u", "p", "t", "t"],
        ]);
        ws.delete_row(2).unwrap();
        assert_eq!(ws.row(2).unwrap()[0], "b", "Row 3 shifted up to 2");
    }

    #[test]
    fn test_find_all_reports_row_and_column() {
        let ws = MemoryWorksheet::with_rows(vec![["svc", "u1", "p", "t", "t"]]);
        let hits = ws.find_all("svc").unwrap();
        assert_eq!(hits, vec![CellRef { row: 2, col: 1 }]);
        assert_eq!(ws.find_calls.get(), 1);
    }

    #[test]
    fn test_out_of_bounds_access_fails() {
        let ws = MemoryWorksheet::new();
        assert!(matches!(
            ws.cell(5, 1),
            Err(TransportError::RowOutOfBounds(5))
        ));
        assert!(matches!(
            ws.cell(1, 9),
            Err(TransportError::ColumnOutOfBounds(9))
        ));
    }

    #[test]
    fn test_client_create_registers_title() {
        let (client, state) = MemoryClient::new();
        assert!(matches!(
            client.open_by_title("keyring"),
            Err(TransportError::DocumentNotFound)
        ));

        client.create("keyring").unwrap();
        assert!(client.open_by_title("keyring").is_ok());
        assert_eq!(state.created.borrow().as_slice(), ["keyring"]);
    }
}
