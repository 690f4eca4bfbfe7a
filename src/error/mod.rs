//! Error types for blogview.
//!
//! Load failures are modelled by [`LoadError`]. The view controller turns
//! any of them into a single message string, so the variants exist for
//! logging and tests rather than for branching in the UI.
//!
//! | Variant | Shown as |
//! |---------|----------|
//! | `Status` | `Failed to fetch data` |
//! | `Transport` | the transport error text |
//! | `Parse` | the JSON parser's message |
//! | `Interrupted` | a fixed notice |

mod load;

pub use load::{LoadError, FETCH_FAILED_MESSAGE};
