//! # genbot-telegram
//!
//! Telegram transport layer: update adapters, [`genbot_core::Transport`] implementation,
//! long-polling [`genbot_core::UpdateSource`], command registration, minimal config.
//! No dialog logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod poller;
mod startup;

pub use adapters::TelegramUpdateWrapper;
pub use bot_adapter::TelegramTransport;
pub use config::{TelegramConfig, DEFAULT_POLL_TIMEOUT_SECS};
pub use poller::TelegramPoller;
pub use startup::{bot_commands, fetch_bot_username, register_commands};
