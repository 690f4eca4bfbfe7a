//! AppMessage enum for async communication within the application.

use crate::models::Document;

/// Messages received from the background fetch task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Document fetched and parsed
    DocumentLoaded(Document),
    /// Load failed; carries the user-facing message
    DocumentLoadFailed(String),
}
