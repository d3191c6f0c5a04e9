//! genbot binary: loads `.env`, parses the CLI, runs the bot until the process is killed.

use anyhow::Result;
use clap::Parser;
use genbot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Run {
            token,
            cohere_api_key,
        } => {
            let config = load_config(token, cohere_api_key)?;
            run_bot(config).await
        }
    }
}
