//! Screen objects and their identity

use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::container::{NavigationController, TabBarController};

/// Shared handle to a screen
pub type ScreenRef = Rc<dyn Screen>;

/// Discriminant identifying what a screen is (settings, profile, ...)
///
/// Existence queries compare kinds instead of inspecting concrete types, so
/// every screen type names itself explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScreenKind(&'static str);

impl ScreenKind {
    /// Create a kind from its name
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A platform screen
///
/// Relationships are optional: a screen shown standalone has no navigation
/// controller, a screen outside a tab container has no tab bar. Callers are
/// expected to treat a missing relationship as a normal condition.
pub trait Screen {
    /// What kind of screen this is
    fn kind(&self) -> ScreenKind;

    /// The navigation stack this screen currently sits in
    fn navigation_controller(&self) -> Option<Rc<dyn NavigationController>>;

    /// The tab container this screen is shown in
    ///
    /// Defaults to the tab container of the enclosing navigation stack.
    fn tab_bar_controller(&self) -> Option<Rc<dyn TabBarController>> {
        self.navigation_controller()?.tab_bar_controller()
    }

    /// Present `screen` modally on top of this one
    fn present(&self, screen: ScreenRef, animated: bool);

    /// Dismiss the screen presented by this one
    ///
    /// A screen presenting nothing asks its presenter to dismiss it.
    fn dismiss(&self, animated: bool);

    /// The screen currently presented by this one
    fn presented(&self) -> Option<ScreenRef>;

    /// Called by a navigation controller when the screen enters (`Some`) or
    /// leaves (`None`) its stack
    fn set_navigation_controller(&self, _controller: Option<Weak<dyn NavigationController>>) {}

    /// The screen that presented this one
    fn presenting(&self) -> Option<ScreenRef> {
        None
    }

    /// Called by the presenter when this screen is presented (`Some`) or
    /// dismissed (`None`)
    fn set_presenting(&self, _presenter: Option<Weak<dyn Screen>>) {}
}

/// Whether two handles point at the same screen
pub fn same_screen(a: &ScreenRef, b: &ScreenRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
