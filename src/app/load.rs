//! Document fetch and the guard that guarantees the load settles.

use tokio::sync::mpsc;

use super::AppMessage;
use crate::error::LoadError;
use crate::models::Document;
use crate::traits::{Headers, HttpClient};

/// Read and parse the blog document at `url`.
///
/// A non-2xx status is reported as [`LoadError::Status`] without looking
/// at the body.
pub async fn fetch_document<C>(client: &C, url: &str) -> Result<Document, LoadError>
where
    C: HttpClient + ?Sized,
{
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    let response = client.get(url, &headers).await?;
    tracing::debug!(status = response.status, bytes = response.body.len(), "document response");

    if !response.is_success() {
        return Err(LoadError::Status {
            status: response.status,
        });
    }

    Ok(response.json::<Document>()?)
}

/// RAII guard that reports exactly one load outcome.
///
/// The fetch task owns the guard. [`LoadingGuard::settle`] reports the real
/// outcome; if the guard is dropped without settling (the task panicked or
/// was torn down) `Drop` reports [`LoadError::Interrupted`] instead, so the
/// view never stays in `Loading` forever.
pub struct LoadingGuard {
    tx: mpsc::UnboundedSender<AppMessage>,
    settled: bool,
}

impl LoadingGuard {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx, settled: false }
    }

    /// Report the outcome and disarm the guard.
    pub fn settle(mut self, outcome: Result<Document, LoadError>) {
        let message = match outcome {
            Ok(document) => AppMessage::DocumentLoaded(document),
            Err(err) => {
                tracing::warn!(error = %err, kind = ?err, "document load failed");
                AppMessage::DocumentLoadFailed(err.to_string())
            }
        };
        self.send(message);
    }

    fn send(&mut self, message: AppMessage) {
        if self.settled {
            return;
        }
        self.settled = true;

        // Receiver gone means the UI already shut down.
        if self.tx.send(message).is_err() {
            tracing::debug!("load outcome dropped: receiver closed");
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("fetch task ended without settling the load");
            self.send(AppMessage::DocumentLoadFailed(
                LoadError::Interrupted.to_string(),
            ));
        }
    }
}
