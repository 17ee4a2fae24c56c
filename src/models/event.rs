//! Conversation event models
//!
//! Plain structured events exchanged between the transport adapter and the
//! conversation engine. `InboundEvent` and `OutboundResponse` are the wire-level
//! shapes; `Event` is the closed set the state machine matches on.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::{StudyBuddyError, Result};
use super::weekday::Weekday;

/// Kind of an inbound interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Start,
    MenuSelection,
    WeekdaySelection,
    FreeText,
}

/// Normalized inbound event as delivered by the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub user_id: i64,
    pub kind: EventKind,
    pub payload: String,
    /// Name used in the greeting, when the transport knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// IETF language tag reported by the client, e.g. `en-US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl InboundEvent {
    pub fn new(user_id: i64, kind: EventKind, payload: impl Into<String>) -> Self {
        Self {
            user_id,
            kind,
            payload: payload.into(),
            display_name: None,
            language_code: None,
        }
    }

    pub fn start(user_id: i64) -> Self {
        Self::new(user_id, EventKind::Start, "")
    }

    pub fn menu(user_id: i64, option: MenuOption) -> Self {
        Self::new(user_id, EventKind::MenuSelection, option.as_str())
    }

    pub fn weekday(user_id: i64, day: Weekday) -> Self {
        Self::new(user_id, EventKind::WeekdaySelection, day.as_str())
    }

    pub fn text(user_id: i64, body: impl Into<String>) -> Self {
        Self::new(user_id, EventKind::FreeText, body)
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_language_code(mut self, code: Option<impl Into<String>>) -> Self {
        self.language_code = code.map(Into::into);
        self
    }

    /// Parse the payload into a typed event
    pub fn to_event(&self) -> Result<Event> {
        match self.kind {
            EventKind::Start => Ok(Event::Start),
            EventKind::MenuSelection => Ok(Event::Menu(self.payload.parse()?)),
            EventKind::WeekdaySelection => Ok(Event::Weekday(self.payload.parse()?)),
            // Free text is passed through untouched, no trimming
            EventKind::FreeText => Ok(Event::Text(self.payload.clone())),
        }
    }
}

/// Main menu entries that drive the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuOption {
    ViewSchedule,
    ViewHomework,
    EditSchedule,
    EditHomework,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::ViewSchedule,
        MenuOption::ViewHomework,
        MenuOption::EditHomework,
        MenuOption::EditSchedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuOption::ViewSchedule => "view_schedule",
            MenuOption::ViewHomework => "view_homework",
            MenuOption::EditSchedule => "edit_schedule",
            MenuOption::EditHomework => "edit_homework",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuOption {
    type Err = StudyBuddyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().replace('-', "_").as_str() {
            "view_schedule" => Ok(MenuOption::ViewSchedule),
            "view_homework" => Ok(MenuOption::ViewHomework),
            "edit_schedule" => Ok(MenuOption::EditSchedule),
            "edit_homework" => Ok(MenuOption::EditHomework),
            _ => Err(StudyBuddyError::InvalidInput(format!("Unknown menu option: {}", s))),
        }
    }
}

/// Typed event the conversation engine dispatches on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Menu(MenuOption),
    Weekday(Weekday),
    Text(String),
}

impl Event {
    /// Short label for logs; never includes free-text bodies
    pub fn label(&self) -> String {
        match self {
            Event::Start => "start".to_string(),
            Event::Menu(option) => format!("menu:{}", option),
            Event::Weekday(day) => format!("weekday:{}", day),
            Event::Text(_) => "text".to_string(),
        }
    }
}

/// Keyboard to attach to an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Picker {
    MainMenu,
    WeekdayList,
    None,
}

/// Response produced by the engine for the transport to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundResponse {
    pub user_id: i64,
    pub text: String,
    pub attach_picker: Picker,
    /// Language the text was rendered in; keyboards use the same one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl OutboundResponse {
    pub fn new(user_id: i64, text: impl Into<String>, attach_picker: Picker) -> Self {
        Self {
            user_id,
            text: text.into(),
            attach_picker,
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn text(user_id: i64, text: impl Into<String>) -> Self {
        Self::new(user_id, text, Picker::None)
    }
}
