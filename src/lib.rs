//! App router
//!
//! Composition root for the navigation layer. Library crates take an
//! [`AppRouter`] explicitly; this crate owns the one shared instance the
//! application bootstrap hands out, and installs logging.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use app_router::app_platform::{HeadlessNavigationController, HeadlessScreen, ScreenKind, ScreenRef};
//!
//! const HOME: ScreenKind = ScreenKind::new("Home");
//! const SEARCH: ScreenKind = ScreenKind::new("Search");
//!
//! app_router::init_tracing("info");
//!
//! let home: ScreenRef = HeadlessScreen::new(HOME);
//! let nav = HeadlessNavigationController::new(Rc::clone(&home));
//!
//! let router = app_router::shared();
//! router.set_root(&home);
//! router.push(HeadlessScreen::new(SEARCH));
//! assert_eq!(nav.depth(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;

use std::cell::OnceCell;
use std::path::Path;
use std::rc::Rc;

use tracing::warn;

pub use app_platform;
pub use app_ui;
pub use app_ui::{
    AppRouter, ConfigError, InstanceCheck, NavigationError, Navigator, RouterConfig,
};
pub use logging::init_tracing;

thread_local! {
    static SHARED: OnceCell<Rc<AppRouter>> = const { OnceCell::new() };
}

/// Install the shared router with `config`
///
/// The first call on a thread wins; later calls return the existing router
/// and ignore their config.
pub fn init_shared(config: RouterConfig) -> Rc<AppRouter> {
    SHARED.with(|cell| {
        if let Some(router) = cell.get() {
            if router.config() != &config {
                warn!("Shared router already initialized, ignoring new config");
            }
            return Rc::clone(router);
        }
        Rc::clone(cell.get_or_init(|| Rc::new(AppRouter::new(config))))
    })
}

/// Install the shared router with a config loaded from a JSON file
pub fn init_shared_from_file(path: impl AsRef<Path>) -> Result<Rc<AppRouter>, ConfigError> {
    let config = RouterConfig::load(path)?;
    Ok(init_shared(config))
}

/// The shared router, created with the default config on first use
pub fn shared() -> Rc<AppRouter> {
    SHARED.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(AppRouter::default()))))
}

/// A navigator over the shared router
pub fn navigator() -> Navigator {
    Navigator::new(shared())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test runs on its own thread, so each sees a fresh shared router.

    #[test]
    fn test_shared_is_a_single_instance() {
        let a = shared();
        let b = shared();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(navigator().router(), a.as_ref()));
    }

    #[test]
    fn test_init_shared_first_call_wins() {
        let first = init_shared(RouterConfig::default().animated(false));
        let second = init_shared(RouterConfig::default());
        assert!(Rc::ptr_eq(&first, &second));
        assert!(!shared().config().animated);
    }

    #[test]
    fn test_shared_is_per_thread() {
        let home: app_platform::ScreenRef =
            app_platform::HeadlessScreen::new(app_platform::ScreenKind::new("Home"));
        shared().set_root(&home);
        assert!(shared().root().is_some());

        let other_has_root = std::thread::spawn(|| shared().root().is_some())
            .join()
            .unwrap();
        assert!(!other_has_root);
    }
}
