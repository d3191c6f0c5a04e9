//! Core types: inbound update events as seen by the dispatcher.

use serde::{Deserialize, Serialize};

/// Opaque chat identity; the unit of session isolation.
pub type ChatId = i64;

/// An inbound event from the transport, reduced to what the dialog logic reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundUpdate {
    /// A new message; `text` is None for non-text messages (photos, stickers, ...).
    Message { chat_id: ChatId, text: Option<String> },
    /// An edited message.
    EditedMessage { chat_id: ChatId, text: Option<String> },
    /// An inline-keyboard callback; `data` is the callback payload.
    CallbackQuery { chat_id: ChatId, data: Option<String> },
}

impl InboundUpdate {
    /// Chat the event originates from.
    pub fn chat_id(&self) -> ChatId {
        match self {
            InboundUpdate::Message { chat_id, .. }
            | InboundUpdate::EditedMessage { chat_id, .. }
            | InboundUpdate::CallbackQuery { chat_id, .. } => *chat_id,
        }
    }

    /// Text or callback data carried by the event; empty when there is none.
    pub fn payload(&self) -> &str {
        let payload = match self {
            InboundUpdate::Message { text, .. } | InboundUpdate::EditedMessage { text, .. } => {
                text.as_deref()
            }
            InboundUpdate::CallbackQuery { data, .. } => data.as_deref(),
        };
        payload.unwrap_or("")
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            InboundUpdate::Message { .. } => "message",
            InboundUpdate::EditedMessage { .. } => "edited_message",
            InboundUpdate::CallbackQuery { .. } => "callback_query",
        }
    }
}
