//! The fixed route table of the blog shell
//!
//! Five pages under one shared layout. The table is pure data, fully
//! determined at startup, and never changes during process lifetime.

use plume_router::{RouteEntry, Router};

use crate::pages::Page;

/// The declarative route table: one root layout entry with the five pages
/// as children, each carrying its historical route name.
pub fn routes() -> RouteEntry<Page> {
    RouteEntry::new("/", Page::DefaultLayout).with_children([
        RouteEntry::new("/", Page::Home).with_name("HomePage"),
        RouteEntry::new("/post/:id", Page::PostDetail).with_name("DetailPage"),
        RouteEntry::new("/managerPost", Page::PostManager).with_name("ManagerPost"),
        RouteEntry::new("/addPost", Page::PostCreate).with_name("AddPost"),
        RouteEntry::new("/editPost/:id", Page::PostEdit).with_name("EditPost"),
    ])
}

/// Compiles the table into a ready-to-use router
pub fn router(case_insensitive: bool) -> Router<Page> {
    Router::new()
        .with_case_insensitive(case_insensitive)
        .with_entry(routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let router = router(false);
        assert_eq!(router.routes().len(), 5);
    }

    #[test]
    fn test_every_route_is_named() {
        let router = router(false);
        for route in router.routes() {
            assert!(route.name.is_some(), "unnamed route {}", route.pattern);
        }
    }
}
