//! Conversation engine
//!
//! The per-user state machine behind the bot. Given an inbound event it looks
//! at the user's session, applies at most one resource mutation and at most one
//! session transition, and produces the reply to send. Events that do not fit
//! the user's current state are absorbed without a reply.
//!
//! Events for the same user are serialized through a per-user lock; events of
//! different users run in parallel. Nothing here performs I/O.

use std::sync::{Arc, Mutex, PoisonError};
use dashmap::DashMap;
use tracing::{error, debug};

use crate::i18n::I18n;
use crate::models::{Event, InboundEvent, MenuOption, OutboundResponse, Picker, Resource, ResourceKind, Weekday};
use crate::state::{ConversationState, ResourceStore, SessionRegistry, SessionState};
use crate::utils::errors::Result;
use crate::utils::logging;

/// What the engine decided to do for a (state, event) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Initialize the user's resources and show the main menu
    Greet,
    /// Show the weekday picker for a menu entry
    OpenPicker(MenuOption),
    /// Reply with the stored text for a day
    ShowDay(ResourceKind, Weekday),
    /// Remember the day and ask for its text
    PickDay(ResourceKind, Weekday),
    /// Store the submitted text for the pending day
    SaveText(ResourceKind, String),
}

/// Transition table. `None` means the event is ignored in this state.
pub fn plan(state: ConversationState, event: Event) -> Option<Action> {
    use ConversationState::*;

    match event {
        Event::Start => Some(Action::Greet),
        Event::Menu(option) => Some(Action::OpenPicker(option)),
        Event::Weekday(day) => match state {
            ChoosingDayForViewSchedule => Some(Action::ShowDay(ResourceKind::Schedule, day)),
            ChoosingDayForViewHomework => Some(Action::ShowDay(ResourceKind::Homework, day)),
            ChoosingDayForEditSchedule => Some(Action::PickDay(ResourceKind::Schedule, day)),
            ChoosingDayForEditHomework => Some(Action::PickDay(ResourceKind::Homework, day)),
            Idle | AwaitingScheduleText | AwaitingHomeworkText => None,
        },
        Event::Text(body) => match state {
            AwaitingScheduleText => Some(Action::SaveText(ResourceKind::Schedule, body)),
            AwaitingHomeworkText => Some(Action::SaveText(ResourceKind::Homework, body)),
            Idle
            | ChoosingDayForViewSchedule
            | ChoosingDayForViewHomework
            | ChoosingDayForEditSchedule
            | ChoosingDayForEditHomework => None,
        },
    }
}

/// State entered when a menu entry is picked
pub fn picker_state(option: MenuOption) -> ConversationState {
    match option {
        MenuOption::ViewSchedule => ConversationState::ChoosingDayForViewSchedule,
        MenuOption::ViewHomework => ConversationState::ChoosingDayForViewHomework,
        MenuOption::EditSchedule => ConversationState::ChoosingDayForEditSchedule,
        MenuOption::EditHomework => ConversationState::ChoosingDayForEditHomework,
    }
}

fn awaiting_state(kind: ResourceKind) -> ConversationState {
    match kind {
        ResourceKind::Schedule => ConversationState::AwaitingScheduleText,
        ResourceKind::Homework => ConversationState::AwaitingHomeworkText,
    }
}

/// The conversation state machine
pub struct ConversationEngine {
    resources: Arc<ResourceStore>,
    sessions: Arc<SessionRegistry>,
    i18n: Arc<I18n>,
    language: String,
    user_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl ConversationEngine {
    /// Create an engine over the given stores, replying in the i18n default language
    pub fn new(resources: Arc<ResourceStore>, sessions: Arc<SessionRegistry>, i18n: Arc<I18n>) -> Self {
        let language = i18n.default_language().to_string();
        Self {
            resources,
            sessions,
            i18n,
            language,
            user_locks: DashMap::new(),
        }
    }

    /// Reply in a different language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Reply language for users whose Telegram language has no catalog
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Current session of a user
    pub fn session(&self, user_id: i64) -> SessionState {
        self.sessions.get(user_id)
    }

    /// Process one inbound event.
    ///
    /// Returns `None` when the event was absorbed: malformed payloads and events
    /// that do not match the user's current state change nothing and get no reply.
    pub fn handle(&self, inbound: &InboundEvent) -> Option<OutboundResponse> {
        let user_id = inbound.user_id;

        let event = match inbound.to_event() {
            Ok(event) => event,
            Err(e) => {
                logging::log_invalid_payload(user_id, &format!("{:?}", inbound.kind), &e.to_string());
                return None;
            }
        };

        let lock = self.user_lock(user_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let lang = self.reply_language(inbound);
        match self.dispatch(user_id, inbound.display_name.as_deref(), &lang, event) {
            Ok(response) => response,
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to process conversation event");
                None
            }
        }
    }

    /// The user's Telegram language when a catalog exists for it, else the engine language
    fn reply_language(&self, inbound: &InboundEvent) -> String {
        self.i18n
            .detect_user_language(inbound.language_code.as_deref())
            .unwrap_or_else(|| self.language.clone())
    }

    /// Resource handle for a user who may have skipped /start
    fn resource(&self, user_id: i64, kind: ResourceKind) -> Resource {
        match self.resources.require(user_id, kind) {
            Ok(resource) => resource,
            Err(e) => {
                debug!(error = %e, kind = %kind, "Initializing resource lazily");
                self.resources.get_or_create(user_id, kind)
            }
        }
    }

    fn user_lock(&self, user_id: i64) -> Arc<Mutex<()>> {
        self.user_locks.entry(user_id).or_default().value().clone()
    }

    fn dispatch(
        &self,
        user_id: i64,
        display_name: Option<&str>,
        lang: &str,
        event: Event,
    ) -> Result<Option<OutboundResponse>> {
        let session = self.sessions.get(user_id);
        let from = session.current_state;
        let label = event.label();

        let Some(action) = plan(from, event) else {
            logging::log_ignored_event(user_id, from.as_str(), &label);
            return Ok(None);
        };

        debug!(user_id = user_id, state = %from, action = ?action, "Dispatching conversation action");

        let response = match action {
            Action::Greet => self.greet(user_id, display_name, lang)?,
            Action::OpenPicker(option) => self.open_picker(user_id, option, lang)?,
            Action::ShowDay(kind, day) => self.show_day(user_id, kind, day, lang)?,
            Action::PickDay(kind, day) => self.pick_day(user_id, kind, day, lang)?,
            Action::SaveText(kind, body) => match session.pending_weekday {
                Some(day) => self.save_text(user_id, kind, day, body, lang)?,
                None => {
                    // Unreachable while the registry enforces the pending-weekday invariant
                    logging::log_ignored_event(user_id, from.as_str(), &label);
                    return Ok(None);
                }
            },
        };

        let to = self.sessions.get(user_id).current_state;
        logging::log_transition(user_id, from.as_str(), to.as_str(), &label);

        Ok(Some(response.with_language(lang)))
    }

    fn greet(&self, user_id: i64, display_name: Option<&str>, lang: &str) -> Result<OutboundResponse> {
        self.resources.ensure_user(user_id);
        self.sessions.transition(user_id, ConversationState::Idle, None)?;

        let default_name = self.i18n.t("commands.start.default_name", lang, None);
        let name = display_name.unwrap_or(&default_name);
        let text = self.i18n.t_with("commands.start.greeting", lang, "name", name);

        logging::log_user_action(user_id, "start", None);
        Ok(OutboundResponse::new(user_id, text, Picker::MainMenu))
    }

    fn open_picker(&self, user_id: i64, option: MenuOption, lang: &str) -> Result<OutboundResponse> {
        self.sessions.transition(user_id, picker_state(option), None)?;

        let key = match option {
            MenuOption::ViewSchedule | MenuOption::ViewHomework => "prompts.choose_day",
            MenuOption::EditSchedule => "prompts.choose_day_edit_schedule",
            MenuOption::EditHomework => "prompts.choose_day_edit_homework",
        };
        let text = self.i18n.t(key, lang, None);

        Ok(OutboundResponse::new(user_id, text, Picker::WeekdayList))
    }

    fn show_day(&self, user_id: i64, kind: ResourceKind, day: Weekday, lang: &str) -> Result<OutboundResponse> {
        let resource = self.resource(user_id, kind);
        self.sessions.transition(user_id, ConversationState::Idle, None)?;

        let text = match resource.get_day(day) {
            Some(content) => self.i18n.t_with(&format!("{}.show", kind), lang, "content", &content),
            None => self.i18n.t(&format!("{}.not_set", kind), lang, None),
        };

        Ok(OutboundResponse::text(user_id, text))
    }

    fn pick_day(&self, user_id: i64, kind: ResourceKind, day: Weekday, lang: &str) -> Result<OutboundResponse> {
        self.sessions.transition(user_id, awaiting_state(kind), Some(day))?;

        let text = self.i18n.t(&format!("{}.enter", kind), lang, None);
        Ok(OutboundResponse::text(user_id, text))
    }

    fn save_text(
        &self,
        user_id: i64,
        kind: ResourceKind,
        day: Weekday,
        body: String,
        lang: &str,
    ) -> Result<OutboundResponse> {
        let resource = self.resource(user_id, kind);
        resource.set_day(day, body);

        // One write takes the session from awaiting straight to idle
        self.sessions.transition(user_id, ConversationState::Idle, None)?;

        let stored = resource.get_day(day).unwrap_or_default();
        let text = self.i18n.t_with(&format!("{}.saved", kind), lang, "content", &stored);

        logging::log_user_action(
            resource.owner_id(),
            "save_day",
            Some(&format!("{}:{}", resource.kind(), day)),
        );
        Ok(OutboundResponse::text(user_id, text))
    }
}
