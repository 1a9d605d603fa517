/// Pattern parsing for route segments
///
/// Pure functions that compile string patterns like `/post/:id` into typed
/// segments: same input → same output, no side effects.

/// A single compiled segment of a route pattern
///
/// # Examples
///
/// ```
/// use plume_router::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("managerPost"), Segment::Static("managerPost".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that the path segment must equal
    Static(String),
    /// Named parameter (`:id`) capturing exactly one path segment
    Param(String),
}

/// Classifies a single pattern segment (pure function)
///
/// A leading `:` marks a named parameter; anything else is static text.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

/// Compiles a pattern into its segments and the ordered parameter names
///
/// # Examples
///
/// ```
/// use plume_router::pattern::compile_pattern;
///
/// let (segments, params) = compile_pattern("/editPost/:id");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(params, vec!["id"]);
///
/// let (segments, params) = compile_pattern("/");
/// assert!(segments.is_empty());
/// assert!(params.is_empty());
/// ```
pub fn compile_pattern(pattern: &str) -> (Vec<Segment>, Vec<String>) {
    let segments: Vec<Segment> = pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect();

    let params = segments
        .iter()
        .filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.clone()),
            Segment::Static(_) => None,
        })
        .collect();

    (segments, params)
}

/// Joins a child pattern onto its parent's pattern
///
/// Child patterns starting with `/` are absolute and stand alone; relative
/// patterns are appended below the parent.
///
/// # Examples
///
/// ```
/// use plume_router::pattern::join_patterns;
///
/// assert_eq!(join_patterns("/", "/post/:id"), "/post/:id");
/// assert_eq!(join_patterns("/admin", "posts"), "/admin/posts");
/// assert_eq!(join_patterns("/", "about"), "/about");
/// ```
pub fn join_patterns(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_string();
    }

    let base = parent.trim_end_matches('/');
    format!("{}/{}", base, child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("addPost"),
            Segment::Static("addPost".to_string())
        );
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn test_compile_static_pattern() {
        let (segments, params) = compile_pattern("/managerPost");
        assert_eq!(segments, vec![Segment::Static("managerPost".to_string())]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_compile_param_pattern() {
        let (segments, params) = compile_pattern("/post/:id");
        assert_eq!(
            segments,
            vec![
                Segment::Static("post".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
        assert_eq!(params, vec!["id"]);
    }

    #[test]
    fn test_compile_root() {
        let (segments, params) = compile_pattern("/");
        assert!(segments.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_join_absolute_child() {
        assert_eq!(join_patterns("/admin", "/post/:id"), "/post/:id");
    }

    #[test]
    fn test_join_relative_child() {
        assert_eq!(join_patterns("/admin", "posts"), "/admin/posts");
        assert_eq!(join_patterns("/", "posts"), "/posts");
    }
}
