//! State management module
//!
//! This module handles conversation state and per-user resource storage

pub mod context;
pub mod sessions;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationState, SessionState};
pub use sessions::SessionRegistry;
pub use storage::ResourceStore;
