//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{BotConfig, ConfigOverrides};

#[derive(Parser, Debug)]
#[command(name = "genbot")]
#[command(about = "Telegram bot that answers prompts with Cohere text generation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (config from env; flags override BOT_TOKEN / COHERE_API_KEY). Default command.
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(long)]
        cohere_api_key: Option<String>,
    },
}

impl Cli {
    /// The command to execute; `run` with no overrides when none was given.
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Run {
            token: None,
            cohere_api_key: None,
        })
    }
}

/// Load BotConfig from environment. Provided values override BOT_TOKEN / COHERE_API_KEY.
pub fn load_config(token: Option<String>, cohere_api_key: Option<String>) -> Result<BotConfig> {
    BotConfig::load(ConfigOverrides {
        bot_token: token,
        cohere_api_key,
    })
}
