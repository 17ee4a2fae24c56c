//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod weekday;
pub mod resource;
pub mod event;

// Re-export commonly used models
pub use weekday::Weekday;
pub use resource::{Resource, ResourceKind};
pub use event::{Event, EventKind, InboundEvent, MenuOption, OutboundResponse, Picker};
