//! Feature-side handle on a router

use std::rc::Rc;

use crate::router::AppRouter;

/// Holds the router feature code navigates with
///
/// Feature-specific navigation helpers hang off this type.
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Rc<AppRouter>,
}

impl Navigator {
    /// Create a navigator using `router`
    pub fn new(router: Rc<AppRouter>) -> Self {
        Self { router }
    }

    /// The router used for navigation
    pub fn router(&self) -> &AppRouter {
        &self.router
    }
}
