//! App router
//!
//! [`AppRouter`] forwards navigation requests to whatever navigation stack,
//! modal relationship or tab container is reachable from its root screen.
//!
//! The root is held weakly and looked up on every call, never cached. When
//! the lookup fails (no root, root dropped, root not embedded in a stack)
//! the mutating operations do nothing: a screen shown standalone is as
//! normal as one shown inside a stack, and callers navigate without first
//! checking which case they are in.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use app_platform::{HeadlessNavigationController, HeadlessScreen, ScreenKind, ScreenRef};
//! use app_ui::{AppRouter, RouterConfig};
//!
//! const HOME: ScreenKind = ScreenKind::new("Home");
//! const SETTINGS: ScreenKind = ScreenKind::new("Settings");
//!
//! let home: ScreenRef = HeadlessScreen::new(HOME);
//! let nav = HeadlessNavigationController::new(Rc::clone(&home));
//!
//! let router = AppRouter::with_root(&home, RouterConfig::default());
//! router.push(HeadlessScreen::new(SETTINGS));
//! assert_eq!(nav.depth(), 2);
//! assert!(router.check_existing_instance(SETTINGS).found);
//!
//! router.pop_to_root();
//! assert_eq!(nav.depth(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use app_platform::{NavigationController, Screen, ScreenKind, ScreenRef, TabBarController};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RouterConfig;
use crate::instance_check::InstanceCheck;

/// Why a navigation context could not be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No root screen has been set
    #[error("Root screen not set")]
    RootUnset,

    /// The root screen has been dropped
    #[error("Root screen has been released")]
    RootReleased,

    /// The root screen is not in a navigation stack
    #[error("Navigation stack not found")]
    NavigationStackNotFound,

    /// The root screen is not in a tab container
    #[error("Tab bar not found")]
    TabBarNotFound,
}

/// Navigation coordinator anchored on a weakly held root screen
pub struct AppRouter {
    root: RefCell<Option<Weak<dyn Screen>>>,
    config: RouterConfig,
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl AppRouter {
    /// Create a router with no root screen
    pub fn new(config: RouterConfig) -> Self {
        Self {
            root: RefCell::new(None),
            config,
        }
    }

    /// Create a router anchored on `root`
    pub fn with_root(root: &ScreenRef, config: RouterConfig) -> Self {
        let router = Self::new(config);
        router.set_root(root);
        router
    }

    /// Get the configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    // =========================================================================
    // Root
    // =========================================================================

    /// Anchor the router on `root` (held weakly)
    pub fn set_root(&self, root: &ScreenRef) {
        info!(screen = %root.kind(), "Root screen set");
        *self.root.borrow_mut() = Some(Rc::downgrade(root));
    }

    /// Forget the root screen
    pub fn clear_root(&self) {
        if self.root.borrow_mut().take().is_some() {
            info!("Root screen cleared");
        }
    }

    /// The root screen, if set and still alive
    pub fn root(&self) -> Option<ScreenRef> {
        self.resolve_root().ok()
    }

    fn resolve_root(&self) -> Result<ScreenRef, NavigationError> {
        let weak = self
            .root
            .borrow()
            .clone()
            .ok_or(NavigationError::RootUnset)?;
        weak.upgrade().ok_or(NavigationError::RootReleased)
    }

    /// The navigation stack the root screen sits in
    pub fn navigation_controller(&self) -> Result<Rc<dyn NavigationController>, NavigationError> {
        self.resolve_root()?
            .navigation_controller()
            .ok_or(NavigationError::NavigationStackNotFound)
    }

    /// The tab container the root screen is shown in
    pub fn tab_bar_controller(&self) -> Result<Rc<dyn TabBarController>, NavigationError> {
        self.resolve_root()?
            .tab_bar_controller()
            .ok_or(NavigationError::TabBarNotFound)
    }

    fn skipped(&self, operation: &'static str, error: NavigationError) {
        if self.config.log_skipped {
            debug!(operation, %error, "Navigation skipped");
        }
    }

    // =========================================================================
    // Stack
    // =========================================================================

    /// Push a screen onto the navigation stack
    pub fn push(&self, screen: ScreenRef) {
        self.push_with_animation(screen, self.config.animated);
    }

    /// Push a screen onto the navigation stack
    pub fn push_with_animation(&self, screen: ScreenRef, animated: bool) {
        match self.navigation_controller() {
            Ok(nav) => nav.push(screen, animated),
            Err(e) => self.skipped("push", e),
        }
    }

    /// Pop the top screen from the navigation stack
    pub fn pop(&self) {
        self.pop_with_animation(self.config.animated);
    }

    /// Pop the top screen from the navigation stack
    pub fn pop_with_animation(&self, animated: bool) {
        match self.navigation_controller() {
            Ok(nav) => {
                nav.pop(animated);
            }
            Err(e) => self.skipped("pop", e),
        }
    }

    /// Pop everything above the stack's first screen
    pub fn pop_to_root(&self) {
        self.pop_to_root_with_animation(self.config.animated);
    }

    /// Pop everything above the stack's first screen
    pub fn pop_to_root_with_animation(&self, animated: bool) {
        match self.navigation_controller() {
            Ok(nav) => {
                nav.pop_to_root(animated);
            }
            Err(e) => self.skipped("pop_to_root", e),
        }
    }

    /// Pop everything above `screen`, if it is in the stack
    pub fn pop_to(&self, screen: &ScreenRef) {
        self.pop_to_with_animation(screen, self.config.animated);
    }

    /// Pop everything above `screen`, if it is in the stack
    pub fn pop_to_with_animation(&self, screen: &ScreenRef, animated: bool) {
        match self.navigation_controller() {
            Ok(nav) => {
                if nav.pop_to(screen, animated).is_none() && self.config.log_skipped {
                    debug!(screen = %screen.kind(), "pop_to target not in stack");
                }
            }
            Err(e) => self.skipped("pop_to", e),
        }
    }

    // =========================================================================
    // Modal
    // =========================================================================

    /// Present a screen modally over the root
    pub fn present(&self, screen: ScreenRef) {
        self.present_with_animation(screen, self.config.animated);
    }

    /// Present a screen modally over the root
    pub fn present_with_animation(&self, screen: ScreenRef, animated: bool) {
        match self.resolve_root() {
            Ok(root) => root.present(screen, animated),
            Err(e) => self.skipped("present", e),
        }
    }

    /// Dismiss the screen presented by the root
    pub fn dismiss(&self) {
        self.dismiss_with_animation(self.config.animated);
    }

    /// Dismiss the screen presented by the root
    pub fn dismiss_with_animation(&self, animated: bool) {
        match self.resolve_root() {
            Ok(root) => root.dismiss(animated),
            Err(e) => self.skipped("dismiss", e),
        }
    }

    /// Pop when the root is in a navigation stack, dismiss otherwise
    ///
    /// A root outside any stack is assumed to have been presented modally.
    pub fn dismiss_or_pop(&self) {
        self.dismiss_or_pop_with_animation(self.config.animated);
    }

    /// Pop when the root is in a navigation stack, dismiss otherwise
    pub fn dismiss_or_pop_with_animation(&self, animated: bool) {
        if self.navigation_controller().is_ok() {
            self.pop_with_animation(animated);
        } else {
            self.dismiss_with_animation(animated);
        }
    }

    // =========================================================================
    // Tab Bar
    // =========================================================================

    /// Show or hide the tab bar of the enclosing tab container
    pub fn set_tab_bar_hidden(&self, hidden: bool) {
        match self.tab_bar_controller() {
            Ok(tabs) => tabs.set_tab_bar_hidden(hidden),
            Err(e) => self.skipped("set_tab_bar_hidden", e),
        }
    }

    /// Hide the tab bar of the enclosing tab container
    pub fn hide_tab_bar(&self) {
        self.set_tab_bar_hidden(true);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look for a screen of `kind` in the navigation stack (bottom to top)
    pub fn check_existing_instance(&self, kind: ScreenKind) -> InstanceCheck {
        let nav = match self.navigation_controller() {
            Ok(nav) => nav,
            Err(e) => {
                debug!(%kind, error = %e, "Instance check without navigation stack");
                return InstanceCheck::unavailable(NavigationError::NavigationStackNotFound);
            }
        };

        if nav.screens().iter().any(|screen| screen.kind() == kind) {
            InstanceCheck::found(kind)
        } else {
            InstanceCheck::not_found(kind)
        }
    }
}

impl fmt::Debug for AppRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRouter")
            .field("root", &self.root().map(|r| r.kind()))
            .field("config", &self.config)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
