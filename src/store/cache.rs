// Sheetkey — Read-Through Cache
//
// Access to the remote store costs hundreds of milliseconds per call, so a
// small cache covers the common cases: set-then-get, and repeated gets.
// The design is deliberately coarse — one stale timer governs the whole
// map, not per-entry TTLs. Any access (any key, get or set) keeps the
// entire cache alive; a renewal interval of silence drops it wholesale.
// This bounds staleness to a human-noticeable but low-traffic-friendly
// interval when a process is left running in the background.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Silence longer than this clears the cache on the next access.
pub(crate) const CACHE_RENEWAL_INTERVAL: Duration = Duration::from_secs(60);

/// Cache key: (service, username).
pub(crate) type CacheKey = (String, String);

/// An entry holds `Some(password)` or a cached negative result (`None`).
/// A present `None` is NOT the same as a miss: it means the store was
/// consulted and had no matching record.
pub(crate) struct PasswordCache {
    entries: HashMap<CacheKey, Option<String>>,
    last_access: Instant,
    renewal: Duration,
}

impl PasswordCache {
    pub(crate) fn new() -> Self {
        Self::with_renewal_interval(CACHE_RENEWAL_INTERVAL)
    }

    pub(crate) fn with_renewal_interval(renewal: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            last_access: Instant::now(),
            renewal,
        }
    }

    /// The only way in: clears the whole map if more than the renewal
    /// interval has elapsed since the last access, resets the timer, and
    /// hands the map back for the caller to read or write directly.
    pub(crate) fn access(&mut self) -> &mut HashMap<CacheKey, Option<String>> {
        let now = Instant::now();
        if now.duration_since(self.last_access) > self.renewal {
            if !self.entries.is_empty() {
                tracing::debug!(entries = self.entries.len(), "Password cache expired");
            }
            self.entries = HashMap::new();
        }
        self.last_access = now;
        &mut self.entries
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
