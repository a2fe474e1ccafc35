//! Platform capabilities for the app router
//!
//! This crate describes the pieces of a UI toolkit the router talks to,
//! without depending on any toolkit:
//!
//! - [`screen::Screen`] - a screen object (view controller, page, view)
//! - [`container::NavigationController`] - an ordered push/pop stack of screens
//! - [`container::TabBarController`] - a tab container with a visual bar
//!
//! A native shell implements these traits over its own widgets. The
//! [`headless`] module implements them in memory; it is what tests and
//! toolkit-less embedders use.
//!
//! Everything here is single-threaded: handles are `Rc`/`Weak` and state
//! lives behind `RefCell`/`Cell`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod container;
pub mod headless;
pub mod screen;
pub mod transition;

pub use container::{NavigationController, TabBarController};
pub use headless::{HeadlessNavigationController, HeadlessScreen, HeadlessTabBarController};
pub use screen::{same_screen, Screen, ScreenKind, ScreenRef};
pub use transition::{Transition, TransitionKind};
