//! Load lifecycle of a viewing session.

use crate::models::Document;

/// Where the session is in its single load.
///
/// `Loading` is the only non-terminal state. Once `Ready` or `Error` is
/// reached the session stays there.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Document),
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            LoadState::Ready(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Error(_) => "error",
        }
    }
}
