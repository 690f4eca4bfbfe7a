//! Errors raised while loading the blog document.

use thiserror::Error;

use crate::traits::HttpError;

/// Message shown when the server answers with a non-2xx status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Why a load ended without a document.
///
/// The view only keeps the `Display` text of this error, so each variant's
/// message is exactly what the user sees.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Server answered, but not with a success status
    #[error("Failed to fetch data")]
    Status { status: u16 },

    /// Request never produced a response
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// Body was not a valid document
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Fetch task ended before reporting an outcome
    #[error("Loading stopped before the document arrived")]
    Interrupted,
}
