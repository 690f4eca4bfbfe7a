//! Shared fixtures for integration tests.

#![allow(dead_code)]

use blogview::app::App;
use blogview::config::AppConfig;
use blogview::models::Document;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};
use std::time::Duration;

/// Long enough for a local mock server, short enough to fail fast.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// A small but complete blog document.
pub fn sample_document_json() -> Value {
    json!({
        "users": [
            {
                "id": 1,
                "name": "Ada Lovelace",
                "username": "ada",
                "avatar": "https://img.example/ada.png",
                "bio": "Wrote the first program"
            },
            {
                "id": 2,
                "name": "Grace Hopper",
                "username": "grace",
                "avatar": "https://img.example/grace.png",
                "bio": "Compilers and nanoseconds"
            }
        ],
        "posts": [
            {
                "id": 1,
                "title": "Notes on the Engine",
                "content": "Short post.",
                "cover_image": "https://img.example/engine.png",
                "tags": ["zebra", "zebra", "math"],
                "published_at": "2024-02-10",
                "likes": 12
            }
        ],
        "categories": [
            { "id": "c1", "name": "Systems" },
            { "id": "c2", "name": "History" }
        ]
    })
}

pub fn sample_document() -> Document {
    serde_json::from_value(sample_document_json()).expect("fixture parses")
}

/// App pointed at `root`, using the real reqwest client.
pub fn app_for_root(root: &str) -> App {
    App::new(AppConfig::default().with_app_root(root))
}

/// Wait for the fetch task's single outcome and apply it.
pub async fn settle(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver present");
    let message = tokio::time::timeout(SETTLE_TIMEOUT, rx.recv())
        .await
        .expect("load settled in time")
        .expect("outcome sent");
    app.handle_message(message);
    app.message_rx = Some(rx);
}

/// Draw the app once and return every cell symbol, row by row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| blogview::ui::render(f, app))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
