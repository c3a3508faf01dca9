//! Webhook delivery.

use std::time::Duration;

use thiserror::Error;

use crate::message::WebhookMessage;

/// Delivery failure.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No webhook URL configured.
    #[error("webhook URL is not configured")]
    NotConfigured,

    /// Transport-level failure (connect, timeout, invalid client config).
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook endpoint answered with a non-success status.
    #[error("webhook endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Outbound webhook channel with a bounded per-request timeout.
///
/// The URL is optional: an unconfigured client fails `send` with
/// [`NotifyError::NotConfigured`] and makes `send_best_effort` a no-op.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl WebhookClient {
    /// Default bound on a single delivery attempt.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Deliver `message`, propagating the outcome to the caller.
    pub async fn send(&self, message: &WebhookMessage) -> Result<(), NotifyError> {
        let url = self.url.as_deref().ok_or(NotifyError::NotConfigured)?;

        let res = self.http.post(url).json(message).send().await?;
        if !res.status().is_success() {
            return Err(NotifyError::Status(res.status()));
        }

        Ok(())
    }

    /// Deliver `message` on a best-effort basis: any failure, including an
    /// unconfigured URL, is logged and swallowed.
    pub async fn send_best_effort(&self, message: &WebhookMessage) {
        match self.send(message).await {
            Ok(()) => tracing::info!("webhook notification delivered"),
            Err(NotifyError::NotConfigured) => {
                tracing::warn!("webhook URL not configured; skipping notification");
            }
            Err(e) => tracing::warn!("webhook notification failed: {e}"),
        }
    }
}
