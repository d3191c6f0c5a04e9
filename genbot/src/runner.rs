//! Process entry: validate config, init logging, wire transport + registry + dispatcher, then poll forever.

use std::sync::Arc;

use anyhow::Result;
use generation_client::mask_token;
use genbot_core::{init_tracing, Transport};
use genbot_telegram::{fetch_bot_username, register_commands, TelegramPoller, TelegramTransport};
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::dispatcher::Dispatcher;
use crate::registry::{CohereSessionFactory, SessionRegistry};

/// Builds the dispatcher for a transport; sessions get fresh Cohere clients from `config`.
pub fn build_dispatcher(config: &BotConfig, transport: Arc<dyn Transport>) -> Dispatcher {
    let factory = Arc::new(CohereSessionFactory::new(transport, config.generation.clone()));
    let registry = Arc::new(SessionRegistry::new(factory));
    Dispatcher::new(registry).with_retry_delay(config.poll_retry_delay())
}

/// Main entry: validate config, init logging, register commands, then run the dispatcher.
/// Returns only on startup errors.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        telegram_api_url = ?config.telegram.telegram_api_url,
        cohere_base_url = %config.generation.cohere_base_url,
        cohere_model = %config.generation.cohere_model,
        cohere_api_key = %mask_token(&config.generation.cohere_api_key),
        "Initializing bot"
    );

    let bot = config.telegram.build_bot()?;
    fetch_bot_username(&bot).await;
    register_commands(&bot).await;

    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(bot.clone()));
    let dispatcher = build_dispatcher(&config, transport);
    let poller = TelegramPoller::new(bot, config.telegram.poll_timeout_secs);

    info!("Bot started successfully");
    dispatcher.run(poller).await;

    Ok(())
}
