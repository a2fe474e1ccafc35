//! Navigation coordination for the app UI
//!
//! This crate provides the router feature code navigates with. It does not
//! own any screens: it finds the live navigation stack, modal relationship
//! and tab container through a weakly held root screen on every call.
//!
//! # Modules
//!
//! - [`router`] - [`AppRouter`], the navigation coordinator
//! - [`navigator`] - [`Navigator`], a feature-side handle on a router
//! - [`instance_check`] - result of stack existence queries
//! - [`config`] - router configuration
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use app_platform::{HeadlessScreen, ScreenKind, ScreenRef};
//! use app_ui::{AppRouter, Navigator, RouterConfig};
//!
//! let router = Rc::new(AppRouter::new(RouterConfig::default().animated(false)));
//! let navigator = Navigator::new(Rc::clone(&router));
//!
//! // Standalone root: no navigation stack, so this does nothing
//! let root: ScreenRef = HeadlessScreen::new(ScreenKind::new("Login"));
//! router.set_root(&root);
//! navigator.router().pop();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod instance_check;
pub mod navigator;
pub mod router;

// Re-export commonly used types
pub use config::{ConfigError, RouterConfig};
pub use instance_check::InstanceCheck;
pub use navigator::Navigator;
pub use router::{AppRouter, NavigationError};
