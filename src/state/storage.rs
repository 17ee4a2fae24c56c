//! Resource storage implementation
//!
//! This module keeps every user's schedule and homework in memory, keyed by
//! user id and resource kind. Entries are created lazily and never evicted.

use std::collections::HashSet;
use dashmap::DashMap;
use tracing::debug;

use crate::models::{Resource, ResourceKind};
use crate::utils::errors::{StudyBuddyError, Result};

/// In-memory registry of per-user resources
#[derive(Debug, Default)]
pub struct ResourceStore {
    resources: DashMap<(i64, ResourceKind), Resource>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the user's resource of the given kind, creating an empty one if needed.
    ///
    /// Repeated calls hand out handles to the same storage.
    pub fn get_or_create(&self, user_id: i64, kind: ResourceKind) -> Resource {
        self.resources
            .entry((user_id, kind))
            .or_insert_with(|| {
                debug!(user_id = user_id, kind = %kind, "Creating resource");
                Resource::new(user_id, kind)
            })
            .value()
            .clone()
    }

    /// Look up a resource without creating it
    pub fn get(&self, user_id: i64, kind: ResourceKind) -> Option<Resource> {
        self.resources
            .get(&(user_id, kind))
            .map(|entry| entry.value().clone())
    }

    /// Look up a resource that the user must already have
    pub fn require(&self, user_id: i64, kind: ResourceKind) -> Result<Resource> {
        self.get(user_id, kind)
            .ok_or(StudyBuddyError::UnknownUser { user_id })
    }

    /// Make sure both the schedule and the homework list exist for a user
    pub fn ensure_user(&self, user_id: i64) {
        for kind in ResourceKind::ALL {
            self.get_or_create(user_id, kind);
        }
    }

    /// Number of distinct users with at least one resource
    pub fn user_count(&self) -> usize {
        self.resources
            .iter()
            .map(|entry| entry.key().0)
            .collect::<HashSet<_>>()
            .len()
    }
}
