//! View state module for decoupling UI rendering from application state.
//!
//! Rendering is a pure function of the data it is handed. The types here
//! hold exactly that data, borrowed from the loaded document, so the `ui`
//! module never reaches into [`crate::models::Document`] itself.
//!
//! ```text
//! Document ──project()──▶ PageView ──render──▶ frame
//! ```
//!
//! - [`PageView`]: every card on the ready page
//! - [`AuthorCard`], [`PostCard`], [`CategoryChip`]: one per entity
//! - [`RenderKey`]: kind-qualified identity of a card

pub mod page_view;

pub use page_view::{AuthorCard, CategoryChip, EntityKind, PageView, PostCard, RenderKey};
