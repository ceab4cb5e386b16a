// Sheetkey — Timestamp formatting
//
// The backing store's date recognition rejects datetime strings that carry
// a timezone marker. Timestamps are therefore UTC-implicit, at minute
// resolution, with no zone suffix.

use chrono::{DateTime, Utc};

const SHEET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a UTC instant the way the backing store recognizes as a datetime.
pub(crate) fn sheet_timestamp(at: DateTime<Utc>) -> String {
    at.format(SHEET_DATETIME_FORMAT).to_string()
}

/// The current wall-clock time as a store-compatible timestamp string.
pub(crate) fn now_string() -> String {
    sheet_timestamp(Utc::now())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
