//! Wraps teloxide::Bot and implements [`genbot_core::Transport`]. Production code sends messages via Telegram; tests can substitute another Transport impl.

use async_trait::async_trait;
use genbot_core::{ChatId, GenbotError, Result, Transport};
use teloxide::requests::Requester;
use teloxide::types::ChatAction;

/// Thin wrapper around teloxide::Bot that implements genbot-core's Transport trait.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: teloxide::Bot,
}

impl TelegramTransport {
    /// Creates a transport from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(teloxide::types::ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| GenbotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat_id: ChatId) -> Result<()> {
        self.bot
            .send_chat_action(teloxide::types::ChatId(chat_id), ChatAction::Typing)
            .await
            .map_err(|e| GenbotError::Transport(e.to_string()))?;
        Ok(())
    }
}
