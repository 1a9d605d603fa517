//! Scroll positions and the storage seam for per-entry offsets
//!
//! The browser's history/scroll state is ambient and mutable; the
//! [`ScrollStore`] trait makes the controller's dependency on it explicit so
//! the restoration contract is testable without a real browser.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::history::EntryId;

/// A persisted 2D offset associated with a history entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    /// The top of the page — where every fresh navigation lands
    pub const TOP: ScrollPosition = ScrollPosition { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Storage for per-history-entry scroll offsets
///
/// `record` overwrites any offset already held for the entry; `fetch`
/// returns `None` for entries that were never scrolled away from.
pub trait ScrollStore {
    /// Saves the offset the host reported for a history entry
    fn record(&mut self, entry: EntryId, pos: ScrollPosition);

    /// Returns the saved offset for a history entry, if any
    fn fetch(&self, entry: EntryId) -> Option<ScrollPosition>;
}

/// In-memory scroll store, the default for headless hosts and tests
#[derive(Debug, Default)]
pub struct MemoryScrollStore {
    saved: HashMap<EntryId, ScrollPosition>,
}

impl MemoryScrollStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollStore for MemoryScrollStore {
    fn record(&mut self, entry: EntryId, pos: ScrollPosition) {
        self.saved.insert(entry, pos);
    }

    fn fetch(&self, entry: EntryId) -> Option<ScrollPosition> {
        self.saved.get(&entry).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStack;

    #[test]
    fn test_memory_store_round_trip() {
        let mut history = HistoryStack::new();
        let id = history.reset("/").id;

        let mut store = MemoryScrollStore::new();
        assert_eq!(store.fetch(id), None);

        store.record(id, ScrollPosition::new(0.0, 340.0));
        assert_eq!(store.fetch(id), Some(ScrollPosition::new(0.0, 340.0)));

        // A later record for the same entry overwrites the earlier one.
        store.record(id, ScrollPosition::new(0.0, 12.0));
        assert_eq!(store.fetch(id), Some(ScrollPosition::new(0.0, 12.0)));
    }
}
