//! blogview - a terminal viewer for a single-page blog
//!
//! Fetches `/people.json` from the blog's application root once per
//! session and renders its authors, posts and categories. This library
//! exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
