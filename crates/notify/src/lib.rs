//! Outbound chat-webhook channel.
//!
//! Message payloads are Discord-compatible (content + embeds); delivery goes
//! through [`WebhookClient`], which offers two distinct contracts:
//! `send` propagates the outcome, `send_best_effort` logs and swallows it.

pub mod message;
pub mod webhook;

pub use message::{
    bulk_low_stock_alert, low_stock_alert, Embed, EmbedField, EmbedFooter, WebhookMessage, BOT_NAME,
};
pub use webhook::{NotifyError, WebhookClient};
