// Sheetkey — Row Locator
//
// Maps a (service, user) pair to the set of matching row positions. The
// store's search primitive matches a value against the whole table and
// reports (row, col) pairs, not records; intersecting by row number
// reconstructs row-level equality from two column-level scans.

use std::collections::BTreeSet;

use super::adapter::{SERVICE_COL, USERNAME_COL};
use crate::transport::{TransportError, Worksheet};

/// Every row whose service column equals `service` AND whose username
/// column equals `username`. With duplicate rows all matches are returned;
/// the caller picks its tie-break (lowest row is canonical for reads and
/// updates, deletes remove all).
///
/// `BTreeSet` keeps the result ordered, so the canonical minimum and
/// descending deletion order both fall out of iteration.
pub(crate) fn find_rows<W: Worksheet>(
    ws: &W,
    service: &str,
    username: &str,
) -> Result<BTreeSet<usize>, TransportError> {
    let service_rows: BTreeSet<usize> = ws
        .find_all(service)?
        .into_iter()
        .filter(|c| c.col == SERVICE_COL)
        .map(|c| c.row)
        .collect();
    let username_rows: BTreeSet<usize> = ws
        .find_all(username)?
        .into_iter()
        .filter(|c| c.col == USERNAME_COL)
        .map(|c| c.row)
        .collect();
    Ok(service_rows.intersection(&username_rows).copied().collect())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
