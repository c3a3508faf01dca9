//! Process configuration.
//!
//! Read once at startup and injected into the app, never consulted ad hoc —
//! tests substitute their own values.

use std::time::Duration;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Runtime configuration for the scan API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// Destination for outbound notifications. `None` disables dispatch on
    /// the single-scan path and blocks it on the bulk path.
    pub webhook_url: Option<String>,
    /// Front-end base URL used as the post-scan redirect target.
    pub frontend_url: String,
    /// User id pinged in outbound messages; `None` means no mention.
    pub mention_user_id: Option<String>,
    /// Bound on a single outbound webhook request.
    pub webhook_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            webhook_url: None,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            mention_user_id: None,
            webhook_timeout: lowstock_notify::WebhookClient::DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            if !port.is_empty() {
                config.listen_addr = format!("0.0.0.0:{port}");
            }
        }

        match std::env::var("DISCORD_WEBHOOK_URL") {
            Ok(url) if !url.is_empty() => config.webhook_url = Some(url),
            _ => tracing::warn!("DISCORD_WEBHOOK_URL not set; notifications disabled"),
        }

        if let Ok(url) = std::env::var("FRONTEND_URL") {
            if !url.is_empty() {
                config.frontend_url = url;
            }
        }

        if let Ok(id) = std::env::var("MENTION_USER_ID") {
            if !id.is_empty() {
                config.mention_user_id = Some(id);
            }
        }

        config
    }

    /// Redirect target after a successful single scan: the front-end base
    /// URL with exactly one trailing slash.
    pub fn redirect_target(&self) -> String {
        format!("{}/", self.frontend_url.trim_end_matches('/'))
    }
}
