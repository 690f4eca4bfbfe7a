//! End-to-end load lifecycle against a mock HTTP server.
//!
//! Each test starts a wiremock server standing in for the blog's static
//! file host and drives a real `App` (reqwest client) through one fetch.

mod common;

use blogview::app::LoadState;
use blogview::error::FETCH_FAILED_MESSAGE;
use blogview::models::Document;
use common::{app_for_root, render_to_string, sample_document, sample_document_json, settle};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people.json"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_successful_load_reaches_ready() {
    let server =
        server_with(ResponseTemplate::new(200).set_body_json(sample_document_json())).await;
    let mut app = app_for_root(&server.uri());

    assert!(app.initialize());
    settle(&mut app).await;

    assert_eq!(app.state, LoadState::Ready(sample_document()));
    assert!(app.needs_redraw);
}

#[tokio::test]
async fn test_request_asks_for_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people.json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document_json()))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for_root(&server.uri());
    app.initialize();
    settle(&mut app).await;

    assert!(app.state.is_ready());
}

#[tokio::test]
async fn test_not_found_shows_fetch_failed() {
    let server = server_with(ResponseTemplate::new(404).set_body_string("nope")).await;
    let mut app = app_for_root(&server.uri());

    app.initialize();
    settle(&mut app).await;

    assert_eq!(app.state, LoadState::Error(FETCH_FAILED_MESSAGE.to_string()));
    assert_eq!(app.state.error_message(), Some("Failed to fetch data"));
}

#[tokio::test]
async fn test_server_error_with_valid_body_still_fails() {
    // The body would parse, but a non-2xx status wins.
    let server =
        server_with(ResponseTemplate::new(500).set_body_json(sample_document_json())).await;
    let mut app = app_for_root(&server.uri());

    app.initialize();
    settle(&mut app).await;

    assert_eq!(app.state, LoadState::Error(FETCH_FAILED_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_malformed_body_shows_parser_message() {
    let server = server_with(ResponseTemplate::new(200).set_body_string("not json")).await;
    let mut app = app_for_root(&server.uri());

    app.initialize();
    settle(&mut app).await;

    let expected = Document::from_json_slice(b"not json")
        .unwrap_err()
        .to_string();
    assert_eq!(app.state, LoadState::Error(expected.clone()));

    let screen = render_to_string(&mut app, 80, 24);
    assert!(screen.contains("expected ident at line 1 column 2"));
    assert!(screen.contains(&expected));
    assert!(!screen.contains(FETCH_FAILED_MESSAGE));
    assert!(!screen.contains("Loading..."));
}

#[tokio::test]
async fn test_missing_collection_is_an_error() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [],
            "posts": []
        })),
    )
    .await;
    let mut app = app_for_root(&server.uri());

    app.initialize();
    settle(&mut app).await;

    let message = app.state.error_message().expect("error state");
    assert!(message.contains("categories"), "got: {}", message);
}

#[tokio::test]
async fn test_unreachable_host_is_an_error() {
    // Nothing listens on the discard port.
    let mut app = app_for_root("http://127.0.0.1:9");

    app.initialize();
    settle(&mut app).await;

    assert!(matches!(app.state, LoadState::Error(_)));
    assert!(!app.is_loading());
}

#[tokio::test]
async fn test_exactly_one_request_per_session() {
    let server =
        server_with(ResponseTemplate::new(200).set_body_json(sample_document_json())).await;
    let mut app = app_for_root(&server.uri());

    assert!(app.initialize());
    assert!(!app.initialize());
    settle(&mut app).await;
    assert!(!app.initialize());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_loading_view_while_request_is_outstanding() {
    let server = server_with(
        ResponseTemplate::new(200)
            .set_body_json(sample_document_json())
            .set_delay(Duration::from_millis(300)),
    )
    .await;
    let mut app = app_for_root(&server.uri());
    app.initialize();

    // Nothing has arrived yet.
    app.process_pending_messages();
    assert!(app.is_loading());
    let screen = render_to_string(&mut app, 80, 24);
    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("Our Authors"));

    settle(&mut app).await;
    assert!(app.state.is_ready());
    let screen = render_to_string(&mut app, 120, 80);
    assert!(!screen.contains("Loading..."));
    assert!(screen.contains("Our Authors"));
}

#[tokio::test]
async fn test_error_view_after_failed_load() {
    let server = server_with(ResponseTemplate::new(503)).await;
    let mut app = app_for_root(&server.uri());

    app.initialize();
    settle(&mut app).await;

    let screen = render_to_string(&mut app, 80, 24);
    assert!(screen.contains("Failed to fetch data"));
    assert!(!screen.contains("Loading..."));
}
