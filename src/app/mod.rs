//! The view controller.
//!
//! [`App`] owns the session: it starts the single document fetch, applies
//! the outcome to its [`LoadState`], and keeps the bits of UI state (scroll
//! offset, dirty flag, terminal size) the render pass needs.

mod handlers;
mod load;
mod messages;
mod state;

pub use load::{fetch_document, LoadingGuard};
pub use messages::AppMessage;
pub use state::LoadState;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tui_scrollview::ScrollViewState;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::traits::HttpClient;

/// Main application state
pub struct App {
    /// Load lifecycle; the document lives here once ready
    pub state: LoadState,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
    /// Vertical position in the rendered page
    pub scroll: ScrollViewState,
    /// Sender handed to the fetch task
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop (Option so it can be moved out)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub config: AppConfig,
    pub terminal_width: u16,
    pub terminal_height: u16,
    client: Arc<dyn HttpClient>,
    fetch_started: bool,
    load_started_at: Option<Instant>,
}

impl App {
    /// Create an app that talks to the network through reqwest.
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
        Self::with_client(config, client)
    }

    /// Create an app with an injected HTTP client.
    pub fn with_client(config: AppConfig, client: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: LoadState::Loading,
            should_quit: false,
            needs_redraw: true,
            scroll: ScrollViewState::default(),
            message_tx,
            message_rx: Some(message_rx),
            config,
            terminal_width: 80,
            terminal_height: 24,
            client,
            fetch_started: false,
            load_started_at: None,
        }
    }

    /// Start the session's one document fetch.
    ///
    /// Must be called inside a tokio runtime. Returns `false` (and issues no
    /// request) if the fetch was already started.
    pub fn initialize(&mut self) -> bool {
        if self.fetch_started {
            tracing::debug!("initialize called again; fetch already started");
            return false;
        }
        self.fetch_started = true;
        self.load_started_at = Some(Instant::now());

        let url = self.config.document_url();
        let client = Arc::clone(&self.client);
        let guard = LoadingGuard::new(self.message_tx.clone());

        tracing::info!(%url, "fetching document");
        tokio::spawn(async move {
            let outcome = fetch_document(client.as_ref(), &url).await;
            guard.settle(outcome);
        });
        true
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Apply a message from the fetch task.
    ///
    /// Only the first outcome is applied. Both `Ready` and `Error` are
    /// terminal, so anything arriving later is logged and dropped.
    pub fn handle_message(&mut self, message: AppMessage) {
        if !self.state.is_loading() {
            tracing::warn!(
                state = self.state.label(),
                "ignoring load outcome: session already settled"
            );
            return;
        }

        let elapsed_ms = self
            .load_started_at
            .map(|start| start.elapsed().as_millis() as u64)
            .unwrap_or_default();

        self.state = match message {
            AppMessage::DocumentLoaded(document) => {
                tracing::info!(
                    users = document.users.len(),
                    posts = document.posts.len(),
                    categories = document.categories.len(),
                    elapsed_ms,
                    "document ready"
                );
                LoadState::Ready(document)
            }
            AppMessage::DocumentLoadFailed(error) => {
                tracing::info!(%error, elapsed_ms, "document load failed");
                LoadState::Error(error)
            }
        };
        self.mark_dirty();
    }

    /// Drain whatever the fetch task has already sent.
    ///
    /// Used when the receiver is still owned by the app (tests, or a loop
    /// that polls instead of selecting).
    pub fn process_pending_messages(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                pending.push(message);
            }
        }
        for message in pending {
            self.handle_message(message);
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::models::Document;
    use crate::traits::Response;

    const DOC: &str = r#"{"users": [], "posts": [], "categories": []}"#;

    fn app_with(client: &MockHttpClient) -> App {
        App::with_client(
            AppConfig::default().with_app_root("http://blog.test"),
            Arc::new(client.clone()),
        )
    }

    async fn settle(app: &mut App) {
        let mut rx = app.message_rx.take().expect("receiver present");
        let message = rx.recv().await.expect("outcome sent");
        app.handle_message(message);
        app.message_rx = Some(rx);
    }

    fn empty_doc() -> Document {
        serde_json::from_str(DOC).unwrap()
    }

    #[test]
    fn test_new_app_is_loading() {
        let app = App::with_client(AppConfig::default(), Arc::new(MockHttpClient::new()));
        assert!(app.is_loading());
        assert!(app.needs_redraw);
        assert!(!app.fetch_started);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_initialize_reaches_ready() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://blog.test/people.json",
            MockResponse::Success(Response::new(200, DOC)),
        );
        let mut app = app_with(&client);

        assert!(app.initialize());
        settle(&mut app).await;

        assert_eq!(app.state, LoadState::Ready(empty_doc()));
    }

    #[tokio::test]
    async fn test_initialize_twice_issues_one_request() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, DOC)));
        let mut app = app_with(&client);

        assert!(app.initialize());
        assert!(!app.initialize());
        settle(&mut app).await;

        assert_eq!(client.get_requests().len(), 1);
        assert_eq!(client.get_requests()[0].url, "http://blog.test/people.json");
    }

    #[tokio::test]
    async fn test_status_failure_reaches_error() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(503, "")));
        let mut app = app_with(&client);

        app.initialize();
        settle(&mut app).await;

        assert_eq!(app.state.error_message(), Some("Failed to fetch data"));
    }

    #[test]
    fn test_outcome_after_ready_is_ignored() {
        let mut app = App::with_client(AppConfig::default(), Arc::new(MockHttpClient::new()));
        app.handle_message(AppMessage::DocumentLoaded(empty_doc()));
        app.handle_message(AppMessage::DocumentLoadFailed("late".to_string()));
        assert!(app.state.is_ready());
    }

    #[test]
    fn test_outcome_after_error_is_ignored() {
        let mut app = App::with_client(AppConfig::default(), Arc::new(MockHttpClient::new()));
        app.handle_message(AppMessage::DocumentLoadFailed("first".to_string()));
        app.handle_message(AppMessage::DocumentLoaded(empty_doc()));
        assert_eq!(app.state, LoadState::Error("first".to_string()));
    }

    #[test]
    fn test_handle_message_marks_dirty() {
        let mut app = App::with_client(AppConfig::default(), Arc::new(MockHttpClient::new()));
        app.needs_redraw = false;
        app.handle_message(AppMessage::DocumentLoaded(empty_doc()));
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_process_pending_messages_applies_first_only() {
        let mut app = App::with_client(AppConfig::default(), Arc::new(MockHttpClient::new()));
        app.message_tx
            .send(AppMessage::DocumentLoadFailed("boom".to_string()))
            .unwrap();
        app.message_tx
            .send(AppMessage::DocumentLoaded(empty_doc()))
            .unwrap();

        app.process_pending_messages();

        assert_eq!(app.state.error_message(), Some("boom"));
    }
}
