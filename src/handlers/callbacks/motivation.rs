//! "Dose of motivation" callback handler

use std::sync::Arc;
use teloxide::{Bot, types::{ChatId, InputFile}, prelude::*};
use tracing::{info, warn};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::handlers::keyboards::main_menu_keyboard;

/// Send a cat picture with a caption and the main menu.
///
/// If the picture cannot be fetched nothing is sent.
pub async fn handle_motivation(
    bot: Bot,
    user_id: i64,
    language_code: Option<&str>,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> Result<()> {
    let Some(motivation_service) = services.motivation.as_ref() else {
        warn!(user_id = user_id, "Motivation requested while the feature is disabled");
        return Ok(());
    };

    let motivation = match motivation_service.motivate().await {
        Ok(motivation) => motivation,
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Failed to fetch motivation picture");
            return Ok(());
        }
    };

    let lang = i18n
        .detect_user_language(language_code)
        .unwrap_or_else(|| services.conversation.language().to_string());
    let keyboard = main_menu_keyboard(&i18n, &lang, true);
    bot.send_photo(ChatId(user_id), InputFile::url(motivation.picture_url))
        .caption(motivation.caption)
        .reply_markup(keyboard)
        .await?;

    info!(user_id = user_id, "Motivation picture sent");
    Ok(())
}
