//! Error handling for StudyBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for StudyBuddy application
#[derive(Error, Debug)]
pub enum StudyBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Unknown user: {user_id}")]
    UnknownUser { user_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for StudyBuddy operations
pub type Result<T> = std::result::Result<T, StudyBuddyError>;

impl StudyBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            StudyBuddyError::Telegram(_) => true,
            StudyBuddyError::Config(_) => false,
            StudyBuddyError::ConfigLoad(_) => false,
            StudyBuddyError::UnknownUser { .. } => true,
            StudyBuddyError::InvalidStateTransition { .. } => false,
            StudyBuddyError::Http(_) => true,
            StudyBuddyError::Serialization(_) => false,
            StudyBuddyError::Io(_) => true,
            StudyBuddyError::UrlParse(_) => false,
            StudyBuddyError::InvalidInput(_) => true,
            StudyBuddyError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StudyBuddyError::Config(_) => ErrorSeverity::Critical,
            StudyBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            StudyBuddyError::UnknownUser { .. } => ErrorSeverity::Info,
            StudyBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            StudyBuddyError::ServiceUnavailable(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
