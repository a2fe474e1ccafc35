//! Result of looking for a screen kind in the navigation stack

use app_platform::ScreenKind;

use crate::router::NavigationError;

/// Outcome of [`AppRouter::check_existing_instance`](crate::AppRouter::check_existing_instance)
///
/// Exactly one of `message` and `error_message` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceCheck {
    /// Whether a screen of the requested kind is in the stack
    pub found: bool,
    /// Set when found
    pub message: Option<String>,
    /// Set when not found, or when there is no stack to look in
    pub error_message: Option<String>,
}

impl InstanceCheck {
    pub(crate) fn found(kind: ScreenKind) -> Self {
        Self {
            found: true,
            message: Some(format!("Found existing {kind} instance")),
            error_message: None,
        }
    }

    pub(crate) fn not_found(kind: ScreenKind) -> Self {
        Self {
            found: false,
            message: None,
            error_message: Some(format!("{kind} instance not found")),
        }
    }

    pub(crate) fn unavailable(error: NavigationError) -> Self {
        Self {
            found: false,
            message: None,
            error_message: Some(error.to_string()),
        }
    }

    /// Hand the result to a `(found, message, error_message)` callback
    pub fn report<F>(self, response: F)
    where
        F: FnOnce(bool, Option<&str>, Option<&str>),
    {
        response(
            self.found,
            self.message.as_deref(),
            self.error_message.as_deref(),
        );
    }
}
