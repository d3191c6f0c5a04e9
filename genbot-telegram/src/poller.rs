//! Long-polling update source: getUpdates with a tracked offset.

use async_trait::async_trait;
use genbot_core::{GenbotError, InboundUpdate, Result, UpdateSource};
use teloxide::payloads::GetUpdatesSetters;
use teloxide::requests::Requester;
use tracing::debug;

use super::adapters::TelegramUpdateWrapper;

/// [`UpdateSource`] backed by Telegram's getUpdates long polling.
pub struct TelegramPoller {
    bot: teloxide::Bot,
    offset: Option<i32>,
    timeout_secs: u32,
}

impl TelegramPoller {
    pub fn new(bot: teloxide::Bot, timeout_secs: u32) -> Self {
        Self {
            bot,
            offset: None,
            timeout_secs,
        }
    }

    /// Offset sent with the next getUpdates call; None before the first update arrives.
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }
}

#[async_trait]
impl UpdateSource for TelegramPoller {
    async fn poll(&mut self) -> Result<Vec<InboundUpdate>> {
        let mut request = self.bot.get_updates().timeout(self.timeout_secs);
        if let Some(offset) = self.offset {
            request = request.offset(offset);
        }
        let updates = request
            .await
            .map_err(|e| GenbotError::Transport(e.to_string()))?;

        let mut batch = Vec::with_capacity(updates.len());
        for update in &updates {
            let wrapper = TelegramUpdateWrapper(update);
            let next = wrapper.next_offset();
            if self.offset.map_or(true, |current| next > current) {
                self.offset = Some(next);
            }
            match wrapper.to_inbound() {
                Some(inbound) => batch.push(inbound),
                None => debug!(update_id = update.id.0, "Skipping unsupported update"),
            }
        }
        Ok(batch)
    }
}
