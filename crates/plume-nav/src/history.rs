//! Linear navigation history with a movable cursor
//!
//! Mirrors browser history semantics: pushing while the cursor sits behind
//! the end truncates the forward tail, and entry ids are never reused, so a
//! truncated entry's saved scroll offset can never be restored by accident.

use serde::{Deserialize, Serialize};

/// Identifier for one entry in the navigation history
///
/// Monotonically increasing within a [`HistoryStack`]; keys the per-entry
/// scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

/// One visited location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub path: String,
}

/// The history stack owned by the navigation controller
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    // Index of the current entry; meaningful only when entries is non-empty.
    cursor: usize,
    next_id: u64,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry the user is currently on, if any navigation happened yet
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// All entries in visit order, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// The entry a back traversal would land on, without moving the cursor
    pub fn peek_back(&self) -> Option<&HistoryEntry> {
        if self.can_go_back() {
            self.entries.get(self.cursor - 1)
        } else {
            None
        }
    }

    /// The entry a forward traversal would land on, without moving the cursor
    pub fn peek_forward(&self) -> Option<&HistoryEntry> {
        if self.can_go_forward() {
            self.entries.get(self.cursor + 1)
        } else {
            None
        }
    }

    /// Clears the stack and starts over with a single entry (initial load)
    pub fn reset(&mut self, path: &str) -> &HistoryEntry {
        let entry = self.alloc(path);
        self.entries.clear();
        self.entries.push(entry);
        self.cursor = 0;
        &self.entries[self.cursor]
    }

    /// Pushes a new entry after the current one, truncating the forward tail
    pub fn push(&mut self, path: &str) -> &HistoryEntry {
        let entry = self.alloc(path);
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        &self.entries[self.cursor]
    }

    /// Replaces the current entry in place, keeping the forward tail
    ///
    /// The replacement gets a fresh id, so scroll offsets recorded against
    /// the replaced entry are orphaned rather than inherited.
    pub fn replace(&mut self, path: &str) -> &HistoryEntry {
        if self.entries.is_empty() {
            return self.push(path);
        }
        let entry = self.alloc(path);
        self.entries[self.cursor] = entry;
        &self.entries[self.cursor]
    }

    /// Moves the cursor one entry back, returning the destination
    ///
    /// Returns `None` without moving when already at the start.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Moves the cursor one entry forward, returning the destination
    ///
    /// Returns `None` without moving when already at the end.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    fn alloc(&mut self, path: &str) -> HistoryEntry {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        HistoryEntry {
            id,
            path: path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack() {
        let stack = HistoryStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.current(), None);
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_push_and_traverse() {
        let mut stack = HistoryStack::new();
        stack.reset("/");
        stack.push("/post/42");
        stack.push("/addPost");

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.current().unwrap().path, "/addPost");

        assert_eq!(stack.back().unwrap().path, "/post/42");
        assert_eq!(stack.back().unwrap().path, "/");
        assert_eq!(stack.back(), None);

        assert_eq!(stack.forward().unwrap().path, "/post/42");
        assert_eq!(stack.forward().unwrap().path, "/addPost");
        assert_eq!(stack.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_tail() {
        let mut stack = HistoryStack::new();
        stack.reset("/");
        stack.push("/post/1");
        stack.push("/post/2");
        assert_eq!(stack.back().unwrap().path, "/post/1");
        assert_eq!(stack.back().unwrap().path, "/");

        stack.push("/managerPost");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current().unwrap().path, "/managerPost");
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut stack = HistoryStack::new();
        let first = stack.reset("/").id;
        let second = stack.push("/post/1").id;
        assert!(stack.back().is_some());
        let third = stack.push("/post/2").id;

        assert!(second < third);
        assert!(first < second);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut stack = HistoryStack::new();
        stack.reset("/");
        stack.push("/post/1");
        let old_id = stack.current().unwrap().id;

        let new_id = stack.replace("/post/2").id;
        assert_ne!(old_id, new_id);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current().unwrap().path, "/post/2");
        assert!(stack.can_go_back());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut stack = HistoryStack::new();
        stack.reset("/");
        stack.push("/post/1");
        stack.push("/post/2");

        stack.reset("/managerPost");

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current().unwrap().path, "/managerPost");
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_peek_does_not_move_cursor() {
        let mut stack = HistoryStack::new();
        stack.reset("/");
        stack.push("/post/1");

        assert_eq!(stack.peek_back().unwrap().path, "/");
        assert_eq!(stack.current().unwrap().path, "/post/1");

        assert!(stack.back().is_some());
        assert_eq!(stack.peek_forward().unwrap().path, "/post/1");
        assert_eq!(stack.current().unwrap().path, "/");
    }
}
