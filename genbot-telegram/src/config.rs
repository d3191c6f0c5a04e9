//! Telegram transport config: token, API URL, long-poll timeout.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL) and POLL_TIMEOUT_SECS.

use genbot_core::{GenbotError, Result};
use std::env;

/// Default long-poll timeout passed to getUpdates, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 10;

/// Telegram transport configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub poll_timeout_secs: u32,
}

impl TelegramConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .map_err(|_| GenbotError::Config("BOT_TOKEN not set".to_string()))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let poll_timeout_secs = env::var("POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);
        Ok(Self {
            bot_token,
            telegram_api_url,
            poll_timeout_secs,
        })
    }

    /// Uses the given token; everything else default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
        }
    }

    /// Validates the API URL (if set) and the poll timeout.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(GenbotError::Config("BOT_TOKEN is empty".to_string()));
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(GenbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        // 0 would turn long polling into a busy loop.
        if self.poll_timeout_secs == 0 {
            return Err(GenbotError::Config(
                "POLL_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the teloxide Bot, pointing it at the custom API URL when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    GenbotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))
                })?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
