//! # Plume Router
//!
//! A declarative routing library for single-page shells with support for:
//! - Static routes (`/managerPost`)
//! - Dynamic parameters (`/post/:id`)
//! - Nested entries under a shared layout
//! - Named routes and URL generation
//!
//! The route table is pure data: it is built once at startup from a tree of
//! [`RouteEntry`] records and never mutated afterwards. Resolution walks the
//! compiled routes **in declaration order** and the first structural match
//! wins; no other ambiguity resolution is performed.
//!
//! ## Path Normalization
//!
//! Requested paths are normalized before matching, so the usual address-bar
//! mistakes (`/addPost/`, `/post//42`) still resolve.
//!
//! ## Example
//!
//! ```
//! use plume_router::{RouteEntry, Router};
//!
//! let router = Router::new().with_entry(
//!     RouteEntry::new("/", "layout").with_children([
//!         RouteEntry::new("/", "home"),
//!         RouteEntry::new("/post/:id", "post-detail"),
//!     ]),
//! );
//!
//! let m = router.resolve("/post/123").unwrap();
//! assert_eq!(m.page, "post-detail");
//! assert_eq!(m.layout, Some("layout"));
//! assert_eq!(m.params.get("id"), Some(&"123".to_string()));
//! ```

use std::collections::HashMap;

use thiserror::Error;

pub mod path;
pub mod pattern;

pub use path::{is_valid_path, normalize_path};
pub use pattern::Segment;

/// Errors produced by route resolution
///
/// There is exactly one failure mode: no entry in the table matches the
/// requested path. Parameter extraction cannot fail once a structural match
/// succeeds, so no other variants exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route entry matches the requested path
    #[error("no route matches path `{path}`")]
    NotFound {
        /// The path as it was requested, before normalization
        path: String,
    },
}

/// A declarative node in the route table
///
/// Entries form an immutable tree. An entry with children acts as a layout:
/// its page wraps every descendant's page, and only leaf entries become
/// matchable routes.
///
/// # Examples
///
/// ```
/// use plume_router::RouteEntry;
///
/// let table = RouteEntry::new("/", "layout").with_children([
///     RouteEntry::new("/", "home").with_name("HomePage"),
///     RouteEntry::new("/post/:id", "post-detail").with_name("DetailPage"),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteEntry<P> {
    pattern: String,
    page: P,
    name: Option<String>,
    children: Vec<RouteEntry<P>>,
}

impl<P> RouteEntry<P> {
    /// Creates a leaf entry for a pattern and page identifier
    pub fn new(pattern: impl Into<String>, page: P) -> Self {
        Self {
            pattern: pattern.into(),
            page,
            name: None,
            children: Vec::new(),
        }
    }

    /// Names this entry (for URL generation and stable references)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a single child entry
    pub fn with_child(mut self, child: RouteEntry<P>) -> Self {
        self.children.push(child);
        self
    }

    /// Adds multiple child entries at once
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry<P>>,
    {
        self.children.extend(children);
        self
    }
}

/// A compiled leaf route: pattern, typed segments, and layout attachment
#[derive(Debug, Clone)]
pub struct Route<P> {
    /// URL pattern like `/post/:id`
    pub pattern: String,
    /// Page identifier this route activates
    pub page: P,
    /// Page identifier of the nearest ancestor layout entry, if any
    pub layout: Option<P>,
    /// Optional name (for URL generation and type-safe references)
    pub name: Option<String>,
    /// Ordered parameter names extracted from the pattern
    pub params: Vec<String>,
    segments: Vec<Segment>,
}

impl<P: Clone> Route<P> {
    /// Compiles a standalone route with no layout
    pub fn new(pattern: impl Into<String>, page: P) -> Self {
        Self::compile(pattern.into(), page, None, None)
    }

    fn compile(pattern: String, page: P, layout: Option<P>, name: Option<String>) -> Self {
        let pattern = normalize_path(&pattern).into_owned();
        let (segments, params) = pattern::compile_pattern(&pattern);
        Self {
            pattern,
            page,
            layout,
            name,
            params,
            segments,
        }
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path
    ///
    /// The path is expected to be in canonical form (see
    /// [`normalize_path`]). Segment counts must agree exactly: a parameter
    /// consumes one segment, never zero or several.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern_seg, path_seg) in self.segments.iter().zip(&path_segments) {
            match pattern_seg {
                Segment::Static(text) => {
                    let matched = if case_insensitive {
                        text.eq_ignore_ascii_case(path_seg)
                    } else {
                        text == path_seg
                    };
                    if !matched {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), path_seg.to_string());
                }
            }
        }

        Some(params)
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Returns `None` when a required parameter is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plume_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/editPost/:id", "post-edit");
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    ///
    /// assert_eq!(route.generate_url(&params), Some("/editPost/7".to_string()));
    /// assert_eq!(route.generate_url(&HashMap::new()), None);
    /// ```
    pub fn generate_url(&self, params: &HashMap<String, String>) -> Option<String> {
        let segments: Option<Vec<&str>> = self
            .segments
            .iter()
            .map(|seg| match seg {
                Segment::Static(text) => Some(text.as_str()),
                Segment::Param(name) => params.get(name).map(String::as_str),
            })
            .collect();

        segments.map(|segs| {
            if segs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", segs.join("/"))
            }
        })
    }
}

/// Result of resolving a path against the route table
#[derive(Debug, Clone)]
pub struct RouteMatch<P> {
    /// The active page identifier
    pub page: P,
    /// The shared layout wrapping the page, if the entry declared one
    pub layout: Option<P>,
    /// The pattern that matched
    pub pattern: String,
    /// Parameters extracted from the concrete path
    pub params: HashMap<String, String>,
}

/// Route table plus resolution
///
/// Holds the compiled routes in declaration order. Construction happens once
/// at startup through the consuming builder methods; there is no mutation
/// API afterwards.
///
/// # Examples
///
/// ```
/// use plume_router::{RouteEntry, RouteError, Router};
///
/// let router = Router::new().with_entry(
///     RouteEntry::new("/", "layout")
///         .with_child(RouteEntry::new("/", "home"))
///         .with_child(RouteEntry::new("/addPost", "post-create")),
/// );
///
/// assert_eq!(router.resolve("/addPost").unwrap().page, "post-create");
///
/// let err = router.resolve("/does-not-exist").unwrap_err();
/// assert_eq!(err, RouteError::NotFound { path: "/does-not-exist".to_string() });
/// ```
#[derive(Debug, Clone)]
pub struct Router<P> {
    routes: Vec<Route<P>>,
    named: HashMap<String, usize>,
    case_insensitive: bool,
}

impl<P: Clone> Router<P> {
    /// Creates an empty router (case-sensitive matching)
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named: HashMap::new(),
            case_insensitive: false,
        }
    }

    /// Configures case-insensitive matching of static segments
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Adds a declarative entry tree, flattening it into compiled routes
    ///
    /// An entry with children contributes no route of its own; its page
    /// becomes the layout for every descendant leaf. Relative child patterns
    /// are joined below the parent pattern, absolute ones stand alone.
    pub fn with_entry(mut self, entry: RouteEntry<P>) -> Self {
        self.flatten(entry, "/", None);
        self
    }

    /// Adds multiple entry trees at once
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry<P>>,
    {
        for entry in entries {
            self.flatten(entry, "/", None);
        }
        self
    }

    /// Adds a pre-compiled route
    pub fn with_route(mut self, route: Route<P>) -> Self {
        self.push_route(route);
        self
    }

    fn flatten(&mut self, entry: RouteEntry<P>, parent_pattern: &str, layout: Option<&P>) {
        let full_pattern = pattern::join_patterns(parent_pattern, &entry.pattern);

        if entry.children.is_empty() {
            let route = Route::compile(full_pattern, entry.page, layout.cloned(), entry.name);
            self.push_route(route);
            return;
        }

        for child in entry.children {
            self.flatten(child, &full_pattern, Some(&entry.page));
        }
    }

    fn push_route(&mut self, route: Route<P>) {
        if let Some(ref name) = route.name {
            self.named.insert(name.clone(), self.routes.len());
        }
        self.routes.push(route);
    }

    /// Resolves a path to its page identifier and parameters
    ///
    /// The path is normalized first, then matched against the routes in
    /// declaration order; the first structural match wins. Fails with
    /// [`RouteError::NotFound`] when nothing matches — surfacing a fallback
    /// page is the caller's concern, not the router's.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<P>, RouteError> {
        let normalized = normalize_path(path);

        self.routes
            .iter()
            .find_map(|route| {
                route
                    .matches_with_options(&normalized, self.case_insensitive)
                    .map(|params| RouteMatch {
                        page: route.page.clone(),
                        layout: route.layout.clone(),
                        pattern: route.pattern.clone(),
                        params,
                    })
            })
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            })
    }

    /// Returns the compiled routes in declaration order
    pub fn routes(&self) -> &[Route<P>] {
        &self.routes
    }

    /// Gets a route by its name
    pub fn route_by_name(&self, name: &str) -> Option<&Route<P>> {
        self.named.get(name).map(|&idx| &self.routes[idx])
    }

    /// Generates a URL from a named route and parameters
    ///
    /// Returns `None` when the route does not exist or a required parameter
    /// is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plume_router::{RouteEntry, Router};
    ///
    /// let router = Router::new().with_entry(
    ///     RouteEntry::new("/post/:id", "post-detail").with_name("DetailPage"),
    /// );
    ///
    /// let url = router.url_for_params("DetailPage", &[("id", "42")]).unwrap();
    /// assert_eq!(url, "/post/42");
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.route_by_name(name)
            .and_then(|route| route.generate_url(params))
    }

    /// Convenience form of [`Router::url_for`] taking parameter tuples
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let param_map: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }
}

impl<P: Clone> Default for Router<P> {
    fn default() -> Self {
        Self::new()
    }
}
