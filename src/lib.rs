//! StudyBuddy Telegram Bot
//!
//! A Telegram bot that keeps a personal weekly schedule and homework list for
//! each user, edited through inline-button prompts. The heart of the crate is
//! the per-user conversation engine in [`services::conversation`]; the
//! [`handlers`] module adapts Telegram updates to it.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StudyBuddyError, Result};

// Re-export main components for easy access
pub use services::{ConversationEngine, ServiceFactory};
pub use state::{ResourceStore, SessionRegistry};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
