//! End-to-end tests for the wired blog shell: the concrete route table
//! driven through the navigation controller.

use plume_app::pages::Page;
use plume_app::routes;
use plume_nav::{NavigationController, NavigationEvent, ScrollPosition};

fn shell() -> NavigationController<Page> {
    NavigationController::new(routes::router(false))
}

#[test]
fn test_url_space_contract() {
    let router = routes::router(false);

    let cases = [
        ("/", Page::Home),
        ("/post/42", Page::PostDetail),
        ("/managerPost", Page::PostManager),
        ("/addPost", Page::PostCreate),
        ("/editPost/7", Page::PostEdit),
    ];

    for (path, page) in cases {
        let m = router.resolve(path).unwrap();
        assert_eq!(m.page, page, "wrong page for {path}");
        assert_eq!(m.layout, Some(Page::DefaultLayout), "layout for {path}");
    }
}

#[test]
fn test_detail_and_edit_params() {
    let router = routes::router(false);

    let m = router.resolve("/post/42").unwrap();
    assert_eq!(m.params.get("id"), Some(&"42".to_string()));

    let m = router.resolve("/editPost/7").unwrap();
    assert_eq!(m.params.get("id"), Some(&"7".to_string()));
}

#[test]
fn test_unknown_path_resolves_to_no_page() {
    let router = routes::router(false);
    assert!(router.resolve("/does-not-exist").is_err());
}

#[test]
fn test_named_urls_match_the_table() {
    let router = routes::router(false);

    assert_eq!(
        router.url_for_params("DetailPage", &[("id", "42")]).as_deref(),
        Some("/post/42")
    );
    assert_eq!(
        router.url_for_params("AddPost", &[]).as_deref(),
        Some("/addPost")
    );
    assert_eq!(
        router.url_for_params("ManagerPost", &[]).as_deref(),
        Some("/managerPost")
    );
}

#[test]
fn test_browse_edit_and_return() {
    // A realistic session: land on home, open a post, go edit it, then walk
    // all the way back; only the traversals restore offsets.
    let mut nav = shell();

    nav.navigate(NavigationEvent::initial("/")).unwrap();
    nav.record_scroll(ScrollPosition::new(0.0, 500.0));

    let detail = nav.navigate(NavigationEvent::link("/post/9")).unwrap();
    assert_eq!(detail.route.page, Page::PostDetail);
    assert_eq!(detail.scroll, ScrollPosition::TOP);
    nav.record_scroll(ScrollPosition::new(0.0, 220.0));

    let edit = nav
        .navigate(NavigationEvent::programmatic("/editPost/9"))
        .unwrap();
    assert_eq!(edit.route.page, Page::PostEdit);
    assert_eq!(edit.scroll, ScrollPosition::TOP);

    let back_to_detail = nav.navigate(NavigationEvent::back("/post/9")).unwrap();
    assert_eq!(back_to_detail.route.page, Page::PostDetail);
    assert_eq!(back_to_detail.scroll, ScrollPosition::new(0.0, 220.0));

    let back_home = nav.navigate(NavigationEvent::back("/")).unwrap();
    assert_eq!(back_home.route.page, Page::Home);
    assert_eq!(back_home.scroll, ScrollPosition::new(0.0, 500.0));
}

#[test]
fn test_case_insensitive_option_from_config() {
    let router = routes::router(true);
    assert_eq!(router.resolve("/managerpost").unwrap().page, Page::PostManager);

    let strict = routes::router(false);
    assert!(strict.resolve("/managerpost").is_err());
}
