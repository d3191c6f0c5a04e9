//! # genbot
//!
//! Telegram bot that forwards prompts to Cohere text generation.
//! Wires genbot-telegram (transport), generation-client (Cohere) and the per-chat dialog:
//! [`Dispatcher`] → [`SessionRegistry`] → [`ChatSession`] state machine.

pub mod cli;
pub mod config;
pub mod dialog;
pub mod dispatcher;
pub mod registry;
pub mod runner;
pub mod session;

pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, ConfigOverrides};
pub use dialog::{
    transition, Action, Command, DialogState, EMPTY_ANSWER_TEXT, GENERATION_ERROR_TEXT,
    GREETING_TEXT, PROMPT_REQUEST_TEXT,
};
pub use dispatcher::{Dispatcher, DEFAULT_RETRY_DELAY};
pub use registry::{CohereSessionFactory, SessionFactory, SessionRegistry};
pub use runner::{build_dispatcher, run_bot};
pub use session::ChatSession;
