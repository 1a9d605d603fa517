//! Navigation events and their trigger kinds
//!
//! An event is ephemeral: created per user action, consumed immediately by
//! the controller, never stored.

use serde::{Deserialize, Serialize};

/// What caused a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    /// The user activated an in-app link
    LinkActivation,
    /// The browser back button (or equivalent host gesture)
    BrowserBack,
    /// The browser forward button
    BrowserForward,
    /// A transition requested by application code
    Programmatic,
    /// The very first resolution when the shell starts
    InitialLoad,
}

impl Trigger {
    /// True for history traversals — the only triggers that may restore a
    /// saved scroll offset
    pub fn is_traversal(self) -> bool {
        matches!(self, Trigger::BrowserBack | Trigger::BrowserForward)
    }
}

/// A single transition request between pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// Target path, as the host saw it
    pub path: String,
    /// What caused this navigation
    pub trigger: Trigger,
}

impl NavigationEvent {
    pub fn new(path: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            path: path.into(),
            trigger,
        }
    }

    /// The first navigation when the shell starts
    pub fn initial(path: impl Into<String>) -> Self {
        Self::new(path, Trigger::InitialLoad)
    }

    /// An in-app link activation
    pub fn link(path: impl Into<String>) -> Self {
        Self::new(path, Trigger::LinkActivation)
    }

    /// A transition requested by application code
    pub fn programmatic(path: impl Into<String>) -> Self {
        Self::new(path, Trigger::Programmatic)
    }

    /// A browser-back traversal to the given path
    pub fn back(path: impl Into<String>) -> Self {
        Self::new(path, Trigger::BrowserBack)
    }

    /// A browser-forward traversal to the given path
    pub fn forward(path: impl Into<String>) -> Self {
        Self::new(path, Trigger::BrowserForward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_triggers() {
        assert!(Trigger::BrowserBack.is_traversal());
        assert!(Trigger::BrowserForward.is_traversal());
        assert!(!Trigger::LinkActivation.is_traversal());
        assert!(!Trigger::Programmatic.is_traversal());
        assert!(!Trigger::InitialLoad.is_traversal());
    }

    #[test]
    fn test_trigger_serializes_kebab_case() {
        let json = serde_json::to_string(&Trigger::LinkActivation).unwrap();
        assert_eq!(json, "\"link-activation\"");

        let event = NavigationEvent::back("/post/42");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"path":"/post/42","trigger":"browser-back"}"#);
    }
}
