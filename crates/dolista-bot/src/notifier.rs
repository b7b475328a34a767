use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::state::{AppState, Context};

/// Sends a text reply to a conversation on the messaging platform.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, token: &str, chat_id: i64, text: &str) -> Result<()>;
}

/// Telegram Bot API `sendMessage` over a shared HTTP client.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
}

impl TelegramNotifier {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    fn send_message_url(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base.trim_end_matches('/'), token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, token: &str, chat_id: i64, text: &str) -> Result<()> {
        let chat_id = chat_id.to_string();
        let resp = self
            .client
            .post(self.send_message_url(token))
            .form(&[("chat_id", chat_id.as_str()), ("text", text)])
            .send()
            .await
            // The URL carries the bot token
            .map_err(|e| anyhow!("sendMessage request failed: {}", e.without_url()))?;

        let status = resp.status();
        // Always drain the body so the connection is released.
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            bail!("sendMessage returned {}: {}", status, body);
        }

        Ok(())
    }
}

/// Fire-and-forget reply to the requesting conversation. Failures are logged
/// and otherwise dropped; nothing is retried.
pub async fn notify(state: &AppState, ctx: &Context, text: &str) {
    match state
        .notifier
        .send_message(&ctx.config.telegram_token, ctx.chat_id, text)
        .await
    {
        Ok(()) => debug!("Reply sent to chat {}", ctx.chat_id),
        Err(e) => warn!("Failed to send reply to chat {}: {:#}", ctx.chat_id, e),
    }
}
