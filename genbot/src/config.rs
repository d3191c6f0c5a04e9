//! Bot configuration: Telegram transport + generation API + logging + poll retry. Loaded from env.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use generation_client::EnvGenerationConfig;
use genbot_telegram::TelegramConfig;

/// Values given on the command line; they win over environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bot_token: Option<String>,
    pub cohere_api_key: Option<String>,
}

/// Full bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub generation: EnvGenerationConfig,
    /// LOG_FILE
    pub log_file: String,
    /// POLL_RETRY_DELAY_SECS: wait after a failed poll
    pub poll_retry_delay_secs: u64,
}

impl BotConfig {
    /// Load from environment variables, applying `overrides` on top.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let telegram = TelegramConfig::load(overrides.bot_token)
            .context("Failed to load Telegram config")?;
        let generation = EnvGenerationConfig::load(overrides.cohere_api_key)
            .context("Failed to load generation config")?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/genbot.log".to_string());
        let poll_retry_delay_secs = env::var("POLL_RETRY_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            telegram,
            generation,
            log_file,
            poll_retry_delay_secs,
        })
    }

    /// Validate config: Telegram URL/timeout, Cohere key and base URL.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.generation.cohere_api_key.trim().is_empty() {
            anyhow::bail!("COHERE_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.generation.cohere_base_url).is_err() {
            anyhow::bail!(
                "COHERE_BASE_URL is not a valid URL: {}",
                self.generation.cohere_base_url
            );
        }
        Ok(())
    }

    pub fn poll_retry_delay(&self) -> Duration {
        Duration::from_secs(self.poll_retry_delay_secs)
    }
}
