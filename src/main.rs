//! StudyBuddy Telegram Bot
//!
//! Main application entry point

use std::path::Path;
use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use StudyBuddy::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    i18n::I18n,
    handlers::{Command, handle_command, handle_callback_query, handle_message},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", StudyBuddy::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::with_builtin(&settings.i18n)?;
    if let Some(dir) = &settings.i18n.translations_dir {
        i18n.load_translations(Path::new(dir)).await?;
    }
    let i18n = Arc::new(i18n);

    // Initialize bot and services
    let bot = Bot::new(&settings.bot.token);
    let services = ServiceFactory::new(&settings, i18n.clone())?;
    if services.motivation.is_none() {
        info!("Motivation feature disabled");
    }

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services, i18n])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("StudyBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    // Handle commands
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    // Everything else is free text
                    dptree::endpoint(handle_messages),
                ),
        )
        .branch(
            Update::filter_callback_query()
                .endpoint(handle_callbacks),
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, services, i18n).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, services, i18n).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, services, i18n).await {
        error!(user_id = user_id, error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
