/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output
/// with no side effects.
use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use plume_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/managerPost"));
/// assert!(is_valid_path("/post/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("addPost")); // Missing leading /
/// assert!(!is_valid_path("/addPost/")); // Trailing /
/// assert!(!is_valid_path("/post//42")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization is needed (single allocation).
///
/// Handles the common address-bar mistakes:
/// - Trailing slashes: `/addPost/` → `/addPost`
/// - Double slashes: `/post//42` → `/post/42`
/// - Backslashes: `\post\42` → `/post/42`
/// - Empty segments: `/post///42` → `/post/42`
///
/// # Examples
///
/// ```
/// use plume_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/managerPost");
/// assert!(matches!(path, Cow::Borrowed("/managerPost")));
///
/// assert_eq!(normalize_path("/addPost/"), "/addPost");
/// assert_eq!(normalize_path("/post//42"), "/post/42");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    // Fast path: already canonical, return borrowed (zero-copy)
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
