//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the StudyBuddy application.

use tracing::{info, debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{StudyBuddyError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| StudyBuddyError::Config(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
            .try_init()
    };
    installed.map_err(|e| StudyBuddyError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a conversation state change
pub fn log_transition(user_id: i64, from: &str, to: &str, event: &str) {
    debug!(
        user_id = user_id,
        from = from,
        to = to,
        event = event,
        "Conversation state changed"
    );
}

/// Log an event that was absorbed without effect
pub fn log_ignored_event(user_id: i64, state: &str, event: &str) {
    debug!(
        user_id = user_id,
        state = state,
        event = event,
        "Event does not match current state, ignoring"
    );
}

/// Log an inbound payload that could not be parsed
pub fn log_invalid_payload(user_id: i64, kind: &str, reason: &str) {
    warn!(
        user_id = user_id,
        kind = kind,
        reason = reason,
        "Dropping malformed inbound event"
    );
}
