//! Error types for the bot core.
//!
//! [`GenbotError`] is the top-level error shared by the transport and session layers.

use thiserror::Error;

/// Top-level error for genbot (transport, config, session construction, IO).
#[derive(Error, Debug)]
pub enum GenbotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenbotError>;
