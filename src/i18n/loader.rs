//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, debug};
use crate::utils::errors::{StudyBuddyError, Result};
use crate::config::I18nConfig;

/// Catalogs compiled into the binary
const BUILTIN_TRANSLATIONS: [(&str, &str); 2] = [
    ("en", include_str!("../../translations/en.json")),
    ("ru", include_str!("../../translations/ru.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance without any catalogs
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Create an instance with the built-in catalogs loaded
    pub fn with_builtin(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        i18n.load_builtin()?;
        Ok(i18n)
    }

    /// Load the catalogs compiled into the binary for every supported language
    pub fn load_builtin(&mut self) -> Result<()> {
        for (lang_code, content) in BUILTIN_TRANSLATIONS {
            if self.is_language_supported(lang_code) {
                self.insert_catalog(lang_code, serde_json::from_str(content)?)?;
            }
        }

        if !self.translations.contains_key(&self.default_language) {
            return Err(StudyBuddyError::Config(format!(
                "No translations available for default language: {}",
                self.default_language
            )));
        }

        Ok(())
    }

    /// Load `<lang>.json` files from a directory, replacing catalogs already loaded.
    ///
    /// Missing files are skipped; a malformed file is an error.
    pub async fn load_translations(&mut self, translations_dir: &Path) -> Result<()> {
        if !translations_dir.exists() {
            warn!("Translations directory not found: {}", translations_dir.display());
            return Ok(());
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                let content = fs::read_to_string(&file_path).await?;
                self.insert_catalog(lang_code, serde_json::from_str(&content)?)?;
                info!("Loaded translations for language: {}", lang_code);
            } else {
                debug!("Translation file not found: {}", file_path.display());
            }
        }

        Ok(())
    }

    fn insert_catalog(&mut self, lang_code: &str, translations: Value) -> Result<()> {
        if let Value::Object(map) = translations {
            debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
            self.translations.insert(lang_code.to_string(), map);
            Ok(())
        } else {
            Err(StudyBuddyError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ))
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let text = self
            .get_translation_value(key, effective_lang)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match text {
            Some(template) => self.format_message(template, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Get a translated message with a single parameter
    pub fn t_with(&self, key: &str, lang: &str, name: &str, value: &str) -> String {
        let mut params = TranslationParams::new();
        params.insert(name.to_string(), value.to_string());
        self.t(key, lang, Some(&params))
    }

    /// Check whether a key resolves in the given language
    pub fn has_key(&self, key: &str, lang: &str) -> bool {
        self.get_translation_value(key, lang).is_some()
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|supported| supported == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    /// Resolve a dotted key like "schedule.saved" to a string
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&str> {
        let translations = self.translations.get(lang)?;

        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        current.as_str()
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        match params {
            Some(params) => params.iter().fold(template.to_string(), |text, (key, value)| {
                text.replace(&format!("{{{}}}", key), value)
            }),
            None => template.to_string(),
        }
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Supported language matching a Telegram language code, if any
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> Option<String> {
        let lang = telegram_lang?;
        // "en-US" -> "en"
        let lang_code = lang.split('-').next().unwrap_or(lang);

        self.is_language_supported(lang_code).then(|| lang_code.to_string())
    }
}
