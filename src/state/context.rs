//! Conversation context management
//!
//! This module defines the conversation states a user can be in and the
//! per-user session record that tracks the current state together with the
//! weekday picked for editing.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{ResourceKind, Weekday};
use crate::utils::errors::{StudyBuddyError, Result};

/// Position of a user in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    ChoosingDayForViewSchedule,
    ChoosingDayForViewHomework,
    ChoosingDayForEditSchedule,
    ChoosingDayForEditHomework,
    AwaitingScheduleText,
    AwaitingHomeworkText,
}

impl ConversationState {
    pub const ALL: [ConversationState; 7] = [
        ConversationState::Idle,
        ConversationState::ChoosingDayForViewSchedule,
        ConversationState::ChoosingDayForViewHomework,
        ConversationState::ChoosingDayForEditSchedule,
        ConversationState::ChoosingDayForEditHomework,
        ConversationState::AwaitingScheduleText,
        ConversationState::AwaitingHomeworkText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::ChoosingDayForViewSchedule => "choosing_day_for_view_schedule",
            ConversationState::ChoosingDayForViewHomework => "choosing_day_for_view_homework",
            ConversationState::ChoosingDayForEditSchedule => "choosing_day_for_edit_schedule",
            ConversationState::ChoosingDayForEditHomework => "choosing_day_for_edit_homework",
            ConversationState::AwaitingScheduleText => "awaiting_schedule_text",
            ConversationState::AwaitingHomeworkText => "awaiting_homework_text",
        }
    }

    /// Resource whose text is expected next, for the two awaiting states
    pub fn awaiting_text_for(&self) -> Option<ResourceKind> {
        match self {
            ConversationState::AwaitingScheduleText => Some(ResourceKind::Schedule),
            ConversationState::AwaitingHomeworkText => Some(ResourceKind::Homework),
            _ => None,
        }
    }

    /// Whether a free-text submission is expected in this state
    pub fn awaits_text(&self) -> bool {
        self.awaiting_text_for().is_some()
    }

    /// Whether a weekday selection is expected in this state
    pub fn awaits_weekday(&self) -> bool {
        matches!(
            self,
            ConversationState::ChoosingDayForViewSchedule
                | ConversationState::ChoosingDayForViewHomework
                | ConversationState::ChoosingDayForEditSchedule
                | ConversationState::ChoosingDayForEditHomework
        )
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user session record.
///
/// `pending_weekday` is set exactly when `current_state` awaits free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current conversation state
    pub current_state: ConversationState,
    /// Day selected for editing, held until the text arrives
    pub pending_weekday: Option<Weekday>,
    /// When this session was last changed
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    /// Build a session, rejecting pairs that break the pending-weekday invariant
    pub fn new(current_state: ConversationState, pending_weekday: Option<Weekday>) -> Result<Self> {
        if current_state.awaits_text() != pending_weekday.is_some() {
            return Err(StudyBuddyError::InvalidStateTransition {
                from: format!("pending={:?}", pending_weekday),
                to: current_state.to_string(),
            });
        }

        Ok(Self {
            current_state,
            pending_weekday,
            updated_at: Utc::now(),
        })
    }

    /// The (state, pending weekday) pair, without the timestamp
    pub fn snapshot(&self) -> (ConversationState, Option<Weekday>) {
        (self.current_state, self.pending_weekday)
    }

    /// Whether the pending-weekday invariant holds
    pub fn is_consistent(&self) -> bool {
        self.current_state.awaits_text() == self.pending_weekday.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_state: ConversationState::Idle,
            pending_weekday: None,
            updated_at: Utc::now(),
        }
    }
}
