//! Start command handler
//!
//! Handles the /start command: initializes the user's schedule and homework
//! and shows the main menu.

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::utils::errors::{StudyBuddyError, Result};
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::models::InboundEvent;
use crate::handlers::send_response;

/// Handle /start command
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        StudyBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    debug!(user_id = user_id, chat_id = ?msg.chat.id, "Processing /start command");

    let display_name = user.username.clone().unwrap_or_else(|| user.first_name.clone());
    let event = InboundEvent::start(user_id)
        .with_display_name(display_name)
        .with_language_code(user.language_code.as_deref());

    if let Some(response) = services.conversation.handle(&event) {
        send_response(&bot, response, &services, &i18n).await?;
    }

    Ok(())
}
