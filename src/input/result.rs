//! Input result type

use serde::Serialize;

/// Result of handling a pointer event
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the window manager
    Handled,
    /// Event did not touch any window (pass through)
    Unhandled,
    /// Event was consumed and the surface cursor should change
    Cursor {
        /// CSS cursor name for the host to apply
        cursor: &'static str,
    },
}

impl InputResult {
    /// Check if the event was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Cursor { .. })
    }

    /// Cursor hint carried by this result, if any
    #[inline]
    pub fn cursor(&self) -> Option<&'static str> {
        match self {
            InputResult::Cursor { cursor } => Some(cursor),
            _ => None,
        }
    }
}
