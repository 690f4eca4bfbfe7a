//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used to load the blog document

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
