//! Message handlers module
//!
//! Turns plain text messages in private chats into free-text events.

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::utils::errors::{StudyBuddyError, Result};
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::models::InboundEvent;
use crate::handlers::send_response;

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        StudyBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    if !chat_id.is_user() {
        debug!(user_id = user_id, chat_id = ?chat_id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let Some(text) = msg.text() else {
        debug!(user_id = user_id, "Ignoring non-text message");
        return Ok(());
    };

    let event = InboundEvent::text(user_id, text).with_language_code(user.language_code.as_deref());
    if let Some(response) = services.conversation.handle(&event) {
        send_response(&bot, response, &services, &i18n).await?;
    }

    Ok(())
}
