//! # Plume Nav
//!
//! The navigation controller for the Plume front-end shell. It consumes the
//! route table from `plume-router` and, on every navigation request (link
//! click, back/forward, programmatic transition, initial load):
//!
//! 1. resolves the target path to a page identifier plus parameters,
//! 2. updates the history stack it owns exclusively,
//! 3. decides the scroll position to apply once the new page has mounted.
//!
//! The scroll contract is the one browsers implement natively: a history
//! traversal (back/forward) restores the offset saved for the destination
//! entry, every other navigation starts at the top. The host reports offsets
//! through [`NavigationController::record_scroll`]; the controller itself
//! never invents them.
//!
//! Navigation is synchronous relative to a single user action — `navigate`
//! takes `&mut self` and runs to completion, so overlapping navigations
//! cannot interleave.
//!
//! ## Example
//!
//! ```
//! use plume_nav::{NavigationController, NavigationEvent, ScrollPosition};
//! use plume_router::{RouteEntry, Router};
//!
//! let router = Router::new().with_entry(
//!     RouteEntry::new("/", "layout").with_children([
//!         RouteEntry::new("/", "home"),
//!         RouteEntry::new("/post/:id", "post-detail"),
//!     ]),
//! );
//! let mut nav = NavigationController::new(router);
//!
//! nav.navigate(NavigationEvent::initial("/")).unwrap();
//! let outcome = nav.navigate(NavigationEvent::link("/post/42")).unwrap();
//! assert_eq!(outcome.route.page, "post-detail");
//! assert_eq!(outcome.scroll, ScrollPosition::TOP);
//!
//! // The user scrolls, then goes back: home restores nothing (never
//! // scrolled), but coming forward again restores the detail offset.
//! nav.record_scroll(ScrollPosition::new(0.0, 500.0));
//! nav.navigate(NavigationEvent::back("/")).unwrap();
//! let outcome = nav.navigate(NavigationEvent::forward("/post/42")).unwrap();
//! assert_eq!(outcome.scroll, ScrollPosition::new(0.0, 500.0));
//! ```

mod event;
mod history;
mod scroll;

pub use event::{NavigationEvent, Trigger};
pub use history::{EntryId, HistoryEntry, HistoryStack};
pub use scroll::{MemoryScrollStore, ScrollPosition, ScrollStore};

use plume_router::{RouteError, RouteMatch, Router};
use tracing::{debug, warn};

/// Outcome of one completed navigation
#[derive(Debug, Clone)]
pub struct Navigation<P> {
    /// The resolved page, layout and parameters
    pub route: RouteMatch<P>,
    /// The scroll position to apply after the page mounts
    pub scroll: ScrollPosition,
    /// The history entry now current
    pub entry: EntryId,
}

/// Process-wide navigation controller
///
/// Created once at startup around an immutable [`Router`] and injected into
/// every page-hosting context. Owns the history stack exclusively; the
/// scroll store is the only ambient state, injected behind [`ScrollStore`].
pub struct NavigationController<P, S = MemoryScrollStore> {
    router: Router<P>,
    history: HistoryStack,
    scroll: S,
}

impl<P: Clone> NavigationController<P, MemoryScrollStore> {
    /// Creates a controller with the in-memory scroll store
    pub fn new(router: Router<P>) -> Self {
        Self::with_scroll_store(router, MemoryScrollStore::new())
    }
}

impl<P: Clone, S: ScrollStore> NavigationController<P, S> {
    /// Creates a controller over a host-provided scroll store
    pub fn with_scroll_store(router: Router<P>, scroll: S) -> Self {
        Self {
            router,
            history: HistoryStack::new(),
            scroll,
        }
    }

    /// The route table this controller resolves against
    pub fn router(&self) -> &Router<P> {
        &self.router
    }

    /// Read access to the history stack (the controller owns mutation)
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Read access to the scroll store
    pub fn scroll_store(&self) -> &S {
        &self.scroll
    }

    /// Records the host-reported scroll offset against the current entry
    ///
    /// The host calls this whenever the offset changes (or at least before
    /// leaving a page); without it a later back/forward to the entry lands
    /// at the top. A no-op before the first navigation.
    pub fn record_scroll(&mut self, pos: ScrollPosition) {
        if let Some(entry) = self.history.current() {
            self.scroll.record(entry.id, pos);
        }
    }

    /// Handles one navigation event to completion
    ///
    /// Resolution happens first: a path that matches no route fails with
    /// [`RouteError::NotFound`] and leaves the history stack untouched.
    /// Otherwise the stack is updated per the trigger kind and the
    /// post-mount scroll position is computed — the saved offset of the
    /// destination entry for back/forward, the top of the page for
    /// everything else (including programmatic transitions).
    pub fn navigate(&mut self, event: NavigationEvent) -> Result<Navigation<P>, RouteError> {
        let route = self.router.resolve(&event.path)?;

        let (entry, saved) = match event.trigger {
            Trigger::InitialLoad => (self.history.reset(&event.path).id, None),
            Trigger::LinkActivation | Trigger::Programmatic => {
                (self.history.push(&event.path).id, None)
            }
            Trigger::BrowserBack | Trigger::BrowserForward => self.traverse(&event),
        };

        let scroll = saved.unwrap_or(ScrollPosition::TOP);
        debug!(
            path = %event.path,
            trigger = ?event.trigger,
            pattern = %route.pattern,
            scroll_y = scroll.y,
            "navigated"
        );

        Ok(Navigation {
            route,
            scroll,
            entry,
        })
    }

    /// Moves the cursor for a back/forward event and looks up the saved
    /// scroll offset of the destination entry.
    fn traverse(&mut self, event: &NavigationEvent) -> (EntryId, Option<ScrollPosition>) {
        let destination = match event.trigger {
            Trigger::BrowserBack => self.history.back(),
            _ => self.history.forward(),
        };

        match destination {
            Some(entry) => {
                if entry.path != event.path {
                    warn!(
                        expected = %entry.path,
                        got = %event.path,
                        "traversal target does not match the history entry"
                    );
                }
                let id = entry.id;
                (id, self.scroll.fetch(id))
            }
            // At the end of the stack: the cursor stays put and the event
            // degrades to a same-entry resolve landing at the top.
            None => match self.history.current() {
                Some(entry) => (entry.id, None),
                None => (self.history.reset(&event.path).id, None),
            },
        }
    }
}
