//! Playback counters shared between a player and its worker.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Lock-free counters updated by `play` and the worker.
#[derive(Debug, Default)]
pub(crate) struct PlaybackCounters {
    requested: AtomicU64,
    played: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

impl PlaybackCounters {
    pub(crate) fn record_request(&self) {
        self.requested.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_played(&self) {
        self.played.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> PlaybackStats {
        PlaybackStats {
            requested: self.requested.load(Ordering::Relaxed),
            played: self.played.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a player's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackStats {
    /// Calls to `play`.
    pub requested: u64,
    /// Patterns handed to the engine.
    pub played: u64,
    /// Attempts that failed and were logged.
    pub failed: u64,
    /// Requests rejected because the queue was full or the worker had stopped.
    pub dropped: u64,
}

impl PlaybackStats {
    /// Requests accepted but not yet processed by the worker.
    #[must_use]
    pub fn pending(&self) -> u64 {
        self.requested
            .saturating_sub(self.played)
            .saturating_sub(self.failed)
            .saturating_sub(self.dropped)
    }
}
