//! Bot handlers module
//!
//! This module is the transport adapter between Telegram and the conversation
//! engine, organized by update type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free-text input

pub mod commands;
pub mod callbacks;
pub mod messages;
pub mod keyboards;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use callbacks::{handle_callback_query, parse_callback_data, CallbackAction};
pub use messages::handle_message;

use teloxide::{Bot, types::ChatId, prelude::*};
use tracing::debug;
use crate::i18n::I18n;
use crate::models::OutboundResponse;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Send an engine response to the user's private chat
pub async fn send_response(
    bot: &Bot,
    response: OutboundResponse,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    let chat_id = ChatId(response.user_id);
    let lang = response
        .language
        .as_deref()
        .unwrap_or_else(|| services.conversation.language());
    debug!(user_id = response.user_id, picker = ?response.attach_picker, "Sending response");

    let markup = keyboards::markup_for(
        response.attach_picker,
        i18n,
        lang,
        services.motivation.is_some(),
    );

    let request = bot.send_message(chat_id, response.text);
    match markup {
        Some(markup) => request.reply_markup(markup).await?,
        None => request.await?,
    };

    Ok(())
}
