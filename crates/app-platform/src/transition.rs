//! Transition records

use serde::Serialize;

/// Type of transition performed by a platform object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionKind {
    /// Screen pushed onto a stack
    Push,
    /// Top screen popped
    Pop,
    /// Stack truncated to its root
    PopToRoot,
    /// Stack truncated to a given screen
    PopTo,
    /// Screen presented modally
    Present,
    /// Modal screen dismissed
    Dismiss,
}

/// A transition that actually happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// What happened
    pub kind: TransitionKind,
    /// Whether it was animated
    pub animated: bool,
}

impl Transition {
    /// Create a transition record
    pub fn new(kind: TransitionKind, animated: bool) -> Self {
        Self { kind, animated }
    }
}
