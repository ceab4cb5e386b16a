// Sheetkey — Record Store Adapter
//
// The only component that mutates the backing table. Everything works in
// terms of 1-based row positions and the fixed column layout below; row
// positions come fresh from the Row Locator immediately before each
// mutation and are never cached across calls. Store-level failures are
// surfaced to the caller unchanged — no retries.

use std::collections::BTreeSet;

use crate::transport::{TransportError, Worksheet};

// Fixed column layout of the credential table.
pub(crate) const SERVICE_COL: usize = 1;
pub(crate) const USERNAME_COL: usize = 2;
pub(crate) const PASSWORD_COL: usize = 3;
#[allow(dead_code)] // written only at insert time, as part of a whole row
pub(crate) const CREATED_AT_COL: usize = 4;
pub(crate) const UPDATED_AT_COL: usize = 5;

/// Row 1 is the header; new records are inserted directly below it, so the
/// most recently written records surface first.
pub(crate) const FIRST_RECORD_ROW: usize = 2;

pub(crate) struct RecordStore<'a, W: Worksheet> {
    ws: &'a mut W,
}

impl<'a, W: Worksheet> RecordStore<'a, W> {
    pub(crate) fn new(ws: &'a mut W) -> Self {
        Self { ws }
    }

    /// Read the password cell of the given row.
    pub(crate) fn read_password(&self, row: usize) -> Result<String, TransportError> {
        self.ws.cell(row, PASSWORD_COL)
    }

    /// Insert a new record directly below the header, with created-at and
    /// updated-at both set to `ts`.
    pub(crate) fn write_new(
        &mut self,
        service: &str,
        username: &str,
        password: &str,
        ts: &str,
    ) -> Result<(), TransportError> {
        let values = [service, username, password, ts, ts].map(String::from);
        self.ws.insert_row(FIRST_RECORD_ROW, &values)?;
        tracing::debug!(service = %service, username = %username, "Inserted new credential row");
        Ok(())
    }

    /// Overwrite the password of an existing row, but only if the stored
    /// value actually differs — a redundant round trip is avoided and
    /// updated-at is left alone. Created-at is never modified on update.
    pub(crate) fn update_existing(
        &mut self,
        row: usize,
        password: &str,
        ts: &str,
    ) -> Result<(), TransportError> {
        if self.ws.cell(row, PASSWORD_COL)? == password {
            tracing::debug!(row, "Password unchanged — skipping write");
            return Ok(());
        }
        self.ws.update_cell(row, PASSWORD_COL, password)?;
        self.ws.update_cell(row, UPDATED_AT_COL, ts)?;
        tracing::debug!(row, "Updated credential row");
        Ok(())
    }

    /// Delete every given row, highest row number first. Deleting a
    /// lower-numbered row first would shift the positions of not-yet-deleted
    /// higher-numbered rows and corrupt subsequent deletions.
    pub(crate) fn delete_rows(&mut self, rows: &BTreeSet<usize>) -> Result<(), TransportError> {
        for &row in rows.iter().rev() {
            self.ws.delete_row(row)?;
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
