//! Schedule and homework resource model

use std::fmt;
use std::sync::Arc;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use super::weekday::Weekday;

/// The two kinds of per-user weekly resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Schedule,
    Homework,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Schedule, ResourceKind::Homework];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Schedule => "schedule",
            ResourceKind::Homework => "homework",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's weekly schedule or homework list.
///
/// A day only has an entry once the user submitted text for it, so an empty
/// string and "not set yet" stay distinguishable. Clones share storage.
#[derive(Debug, Clone)]
pub struct Resource {
    owner_id: i64,
    kind: ResourceKind,
    days: Arc<DashMap<Weekday, String>>,
}

impl Resource {
    /// Create an empty resource for a user
    pub fn new(owner_id: i64, kind: ResourceKind) -> Self {
        Self {
            owner_id,
            kind,
            days: Arc::new(DashMap::new()),
        }
    }

    pub fn owner_id(&self) -> i64 {
        self.owner_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Text stored for a day, if any
    pub fn get_day(&self, day: Weekday) -> Option<String> {
        self.days.get(&day).map(|entry| entry.value().clone())
    }

    /// Store text for a day, replacing whatever was there
    pub fn set_day(&self, day: Weekday, text: impl Into<String>) {
        self.days.insert(day, text.into());
    }

    /// Populated days in weekday order
    pub fn days(&self) -> Vec<(Weekday, String)> {
        let mut days: Vec<(Weekday, String)> = self
            .days
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        days.sort_by_key(|(day, _)| *day);
        days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether both handles point at the same underlying storage
    pub fn shares_storage_with(&self, other: &Resource) -> bool {
        Arc::ptr_eq(&self.days, &other.days)
    }
}
