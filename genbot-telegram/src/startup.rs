//! One-shot startup calls: bot identity lookup and command registration.

use teloxide::requests::Requester;
use teloxide::types::BotCommand;
use tracing::{info, warn};

/// Commands shown in the Telegram client menu.
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Activate the bot."),
        BotCommand::new("generate", "Generate an answer."),
    ]
}

/// Registers [`bot_commands`] with setMyCommands. Failure is logged, not fatal.
pub async fn register_commands(bot: &teloxide::Bot) -> bool {
    match bot.set_my_commands(bot_commands()).await {
        Ok(_) => {
            info!("Bot commands registered");
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to register bot commands");
            false
        }
    }
}

/// Calls getMe and returns the bot's username, if Telegram reports one.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            if let Some(ref name) = username {
                info!(username = %name, "Bot identity confirmed");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed");
            None
        }
    }
}
