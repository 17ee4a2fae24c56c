//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

pub mod motivation;

use std::sync::Arc;
use teloxide::{Bot, types::CallbackQuery, prelude::*};
use tracing::{debug, warn};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::models::{EventKind, InboundEvent};
use crate::handlers::keyboards::{MENU_PREFIX, WEEKDAY_PREFIX, MOTIVATION};
use crate::handlers::send_response;

/// What a button press asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Feed an event to the conversation engine
    Conversation(InboundEvent),
    /// Send a motivation picture; never touches the conversation state
    Motivation,
}

/// Parse `<prefix>:<value>` callback data.
///
/// Values are not validated here; the engine drops payloads it cannot parse.
pub fn parse_callback_data(user_id: i64, data: &str) -> Option<CallbackAction> {
    let (prefix, value) = data.split_once(':')?;

    match prefix {
        MENU_PREFIX if value == MOTIVATION => Some(CallbackAction::Motivation),
        MENU_PREFIX => Some(CallbackAction::Conversation(InboundEvent::new(
            user_id,
            EventKind::MenuSelection,
            value,
        ))),
        WEEKDAY_PREFIX => Some(CallbackAction::Conversation(InboundEvent::new(
            user_id,
            EventKind::WeekdaySelection,
            value,
        ))),
        _ => None,
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    debug!(user_id = user_id, callback_data = ?query.data, "Processing callback query");

    // Answer first to remove the loading state on the button
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, user_id = user_id, "Failed to answer callback query");
    }

    let Some(data) = query.data.as_deref() else {
        return Ok(());
    };

    match parse_callback_data(user_id, data) {
        Some(CallbackAction::Conversation(event)) => {
            let event = event.with_language_code(query.from.language_code.as_deref());
            if let Some(response) = services.conversation.handle(&event) {
                send_response(&bot, response, &services, &i18n).await?;
            }
        }
        Some(CallbackAction::Motivation) => {
            let lang = query.from.language_code.as_deref();
            motivation::handle_motivation(bot, user_id, lang, services, i18n).await?;
        }
        None => {
            warn!(user_id = user_id, data = %data, "Unknown callback data");
        }
    }

    Ok(())
}
