//! Page identifiers for the blog shell
//!
//! A page identifier is the logical name of a renderable screen. Rendering
//! itself is the host's concern; the shell only decides which identifier is
//! active and with which parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// The shared layout hosting every page's output plus the chrome
    DefaultLayout,
    /// Post listing at `/`
    Home,
    /// Single post at `/post/:id`
    PostDetail,
    /// Post management screen at `/managerPost`
    PostManager,
    /// Creation form at `/addPost`
    PostCreate,
    /// Edit form at `/editPost/:id`
    PostEdit,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::DefaultLayout => "DefaultLayout",
            Page::Home => "Home",
            Page::PostDetail => "PostDetail",
            Page::PostManager => "PostManager",
            Page::PostCreate => "PostCreate",
            Page::PostEdit => "PostEdit",
        };
        f.write_str(name)
    }
}
