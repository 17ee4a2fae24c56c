//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub motivation: MotivationConfig,
    pub features: FeaturesConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// Directory with `<lang>.json` files overriding the built-in catalogs
    pub translations_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_name: String,
    pub json: bool,
}

/// Motivation picture API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotivationConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub captions: Vec<String>,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub motivation: bool,
}

impl Settings {
    /// Load settings from defaults, an optional `config` file and environment variables.
    ///
    /// Environment variables use the `STUDYBUDDY` prefix and `__` as the section
    /// separator, e.g. `STUDYBUDDY__BOT__TOKEN`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STUDYBUDDY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StudyBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["en".to_string(), "ru".to_string()],
                translations_dir: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
                file_name: "studybuddy.log".to_string(),
                json: false,
            },
            motivation: MotivationConfig {
                api_url: "https://api.thecatapi.com".to_string(),
                timeout_seconds: 10,
                captions: vec![
                    "You can do it!".to_string(),
                    "One small step today, one big step tomorrow.".to_string(),
                    "Take a break, then finish that homework.".to_string(),
                    "Every expert was once a beginner.".to_string(),
                    "Progress, not perfection.".to_string(),
                ],
            },
            features: FeaturesConfig {
                motivation: true,
            },
        }
    }
}
