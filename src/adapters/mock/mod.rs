//! Test doubles for the adapter traits.

mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
