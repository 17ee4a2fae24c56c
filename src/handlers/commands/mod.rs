//! Command handlers module
//!
//! This module contains handlers for bot commands.

pub mod start;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "StudyBuddy commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services, i18n).await,
    }
}
