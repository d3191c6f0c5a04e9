//! Transport abstraction for outbound calls and inbound polling.
//!
//! [`Transport`] is transport-agnostic; `genbot-telegram` implements it via teloxide.
//! Tests substitute recording mocks.

use crate::error::Result;
use crate::types::{ChatId, InboundUpdate};
use async_trait::async_trait;

/// Outbound side of the chat transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()>;
    /// Shows the "typing" chat action in the given chat.
    async fn send_typing(&self, chat_id: ChatId) -> Result<()>;
}

/// Inbound side of the chat transport: yields batches of updates.
#[async_trait]
pub trait UpdateSource: Send {
    /// Fetches the next batch of updates. An empty batch is valid (poll timed out).
    async fn poll(&mut self) -> Result<Vec<InboundUpdate>>;
}
