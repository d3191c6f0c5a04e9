//! Adapters from Telegram (teloxide) types to genbot_core types.
//! Depends only on teloxide and genbot_core type definitions.

use genbot_core::InboundUpdate;
use teloxide::types::{Update, UpdateKind};

/// Wraps a teloxide Update for conversion to core [`InboundUpdate`].
pub struct TelegramUpdateWrapper<'a>(pub &'a Update);

impl<'a> TelegramUpdateWrapper<'a> {
    /// Converts to [`InboundUpdate`]. Returns None for update kinds the bot ignores
    /// (inline queries, polls, ...) and for callbacks whose message is unavailable.
    pub fn to_inbound(&self) -> Option<InboundUpdate> {
        let chat_id = self.0.chat()?.id.0;
        match &self.0.kind {
            UpdateKind::Message(msg) => Some(InboundUpdate::Message {
                chat_id,
                text: msg.text().map(str::to_string),
            }),
            UpdateKind::EditedMessage(msg) => Some(InboundUpdate::EditedMessage {
                chat_id,
                text: msg.text().map(str::to_string),
            }),
            UpdateKind::CallbackQuery(query) => Some(InboundUpdate::CallbackQuery {
                chat_id,
                data: query.data.clone(),
            }),
            _ => None,
        }
    }

    /// Offset to request next so this update is not delivered again.
    pub fn next_offset(&self) -> i32 {
        self.0.id.0 as i32 + 1
    }
}
