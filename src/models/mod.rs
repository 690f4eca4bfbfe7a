//! Data types for the blog document.

mod document;
pub mod text_utils;

pub use document::{Category, Document, EntityId, Post, User};
pub use text_utils::{truncate_excerpt, ELLIPSIS, EXCERPT_CHARS};
