//! Session registry
//!
//! In-memory, per-user storage for `SessionState`. Sessions are ephemeral and
//! live until the process exits.

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use crate::models::Weekday;
use crate::utils::errors::Result;
use super::context::{ConversationState, SessionState};

/// Registry of conversation sessions keyed by user id
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<i64, SessionState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session of a user; `Idle` with nothing pending if none exists yet
    pub fn get(&self, user_id: i64) -> SessionState {
        self.sessions
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Replace the stored session wholesale.
    ///
    /// Fails without storing anything if the pair breaks the pending-weekday invariant.
    pub fn transition(
        &self,
        user_id: i64,
        new_state: ConversationState,
        pending_weekday: Option<Weekday>,
    ) -> Result<()> {
        let session = SessionState::new(new_state, pending_weekday)?;
        debug!(user_id = user_id, state = %new_state, pending = ?pending_weekday, "Storing session");
        self.sessions.insert(user_id, session);
        Ok(())
    }

    /// Drop the pending weekday, keeping the current state.
    ///
    /// In an awaiting state this leaves the session inconsistent until the next
    /// transition; leave awaiting states with `transition` instead.
    pub fn clear_pending(&self, user_id: i64) {
        if let Some(mut entry) = self.sessions.get_mut(&user_id) {
            entry.pending_weekday = None;
            entry.updated_at = Utc::now();
        }
    }

    /// Number of users with a stored session
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
