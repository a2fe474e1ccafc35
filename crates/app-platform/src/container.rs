//! Container capabilities: navigation stacks and tab containers

use std::rc::Rc;

use crate::screen::ScreenRef;

/// An ordered stack of screens (bottom to top)
///
/// The bottom screen is the stack's root and is never popped.
pub trait NavigationController {
    /// Screens in the stack, bottom to top
    fn screens(&self) -> Vec<ScreenRef>;

    /// Push a screen on top of the stack
    fn push(&self, screen: ScreenRef, animated: bool);

    /// Pop the top screen (returns it, or `None` when only the root is left)
    fn pop(&self, animated: bool) -> Option<ScreenRef>;

    /// Pop everything above the root (returns the popped screens)
    fn pop_to_root(&self, animated: bool) -> Vec<ScreenRef>;

    /// Pop everything above `screen`
    ///
    /// Returns `None` without touching the stack when `screen` is not in it.
    fn pop_to(&self, screen: &ScreenRef, animated: bool) -> Option<Vec<ScreenRef>>;

    /// The tab container this stack is shown in
    fn tab_bar_controller(&self) -> Option<Rc<dyn TabBarController>>;

    /// The top screen
    fn top(&self) -> Option<ScreenRef> {
        self.screens().last().cloned()
    }
}

/// A container grouping navigation stacks under tabs
pub trait TabBarController {
    /// Whether the tab bar is hidden
    fn is_tab_bar_hidden(&self) -> bool;

    /// Show or hide the tab bar
    fn set_tab_bar_hidden(&self, hidden: bool);
}
