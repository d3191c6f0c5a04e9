//! # genbot-core
//!
//! Core types and traits for the bot: [`InboundUpdate`], [`Transport`], [`UpdateSource`],
//! errors, and tracing initialization. Transport-agnostic; used by genbot-telegram and genbot.

pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{GenbotError, Result};
pub use logger::init_tracing;
pub use transport::{Transport, UpdateSource};
pub use types::{ChatId, InboundUpdate};
