//! Services module
//!
//! This module contains business logic services

pub mod conversation;
pub mod motivation;

// Re-export commonly used services
pub use conversation::{ConversationEngine, Action};
pub use motivation::{MotivationService, Motivation};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::i18n::I18n;
use crate::state::{ResourceStore, SessionRegistry};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub conversation: Arc<ConversationEngine>,
    /// Absent when the motivation feature is switched off
    pub motivation: Option<MotivationService>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with fresh in-memory stores
    pub fn new(settings: &Settings, i18n: Arc<I18n>) -> Result<Self> {
        let conversation = ConversationEngine::new(
            Arc::new(ResourceStore::new()),
            Arc::new(SessionRegistry::new()),
            i18n,
        );

        let motivation = if settings.features.motivation {
            Some(MotivationService::new(settings.motivation.clone())?)
        } else {
            None
        };

        Ok(Self {
            conversation: Arc::new(conversation),
            motivation,
        })
    }
}
