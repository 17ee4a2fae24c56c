//! Test context for unified test setup
//!
//! Every test gets its own stores so no state leaks between test cases.

use std::sync::{Arc, Once};
use StudyBuddy::{
    config::Settings,
    i18n::I18n,
    models::{InboundEvent, MenuOption, OutboundResponse, ResourceKind, Weekday},
    services::ConversationEngine,
    state::{ConversationState, ResourceStore, SessionRegistry},
};

static INIT: Once = Once::new();

/// Initialize test logging once per binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Test user id
pub fn test_user_id() -> i64 {
    987654321
}

/// Second test user id
pub fn other_user_id() -> i64 {
    123456789
}

/// Test settings with a bot token filled in
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = "12345:test_token".to_string();
    settings
}

/// Isolated engine plus handles on its stores
pub struct TestContext {
    pub engine: Arc<ConversationEngine>,
    pub resources: Arc<ResourceStore>,
    pub sessions: Arc<SessionRegistry>,
    pub i18n: Arc<I18n>,
}

impl TestContext {
    /// English-speaking engine over fresh stores
    pub fn new() -> Self {
        Self::with_language("en")
    }

    pub fn with_language(lang: &str) -> Self {
        init_test_logging();

        let settings = test_settings();
        let i18n = Arc::new(I18n::with_builtin(&settings.i18n).expect("built-in translations load"));
        let resources = Arc::new(ResourceStore::new());
        let sessions = Arc::new(SessionRegistry::new());
        let engine = ConversationEngine::new(resources.clone(), sessions.clone(), i18n.clone())
            .with_language(lang);

        Self {
            engine: Arc::new(engine),
            resources,
            sessions,
            i18n,
        }
    }

    /// Feed one event to the engine
    pub fn send(&self, event: InboundEvent) -> Option<OutboundResponse> {
        self.engine.handle(&event)
    }

    /// (state, pending weekday) of a user
    pub fn snapshot(&self, user_id: i64) -> (ConversationState, Option<Weekday>) {
        self.sessions.get(user_id).snapshot()
    }

    /// Stored text for a user's day, without creating the resource
    pub fn stored(&self, user_id: i64, kind: ResourceKind, day: Weekday) -> Option<String> {
        self.resources.get(user_id, kind).and_then(|resource| resource.get_day(day))
    }

    /// Run the complete edit flow: menu, weekday, text
    pub fn edit_day(&self, user_id: i64, kind: ResourceKind, day: Weekday, text: &str) -> Option<OutboundResponse> {
        let option = match kind {
            ResourceKind::Schedule => MenuOption::EditSchedule,
            ResourceKind::Homework => MenuOption::EditHomework,
        };
        self.send(InboundEvent::menu(user_id, option));
        self.send(InboundEvent::weekday(user_id, day));
        self.send(InboundEvent::text(user_id, text))
    }

    /// Run the complete view flow: menu, weekday
    pub fn view_day(&self, user_id: i64, kind: ResourceKind, day: Weekday) -> Option<OutboundResponse> {
        let option = match kind {
            ResourceKind::Schedule => MenuOption::ViewSchedule,
            ResourceKind::Homework => MenuOption::ViewHomework,
        };
        self.send(InboundEvent::menu(user_id, option));
        self.send(InboundEvent::weekday(user_id, day))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Services and translations as the dispatcher would inject them
pub fn test_services(settings: &Settings) -> (StudyBuddy::ServiceFactory, Arc<I18n>) {
    init_test_logging();

    let i18n = Arc::new(I18n::with_builtin(&settings.i18n).expect("built-in translations load"));
    let services = StudyBuddy::ServiceFactory::new(settings, i18n.clone()).expect("services build");
    (services, i18n)
}

/// English settings with the motivation feature off
pub fn english_settings() -> Settings {
    let mut settings = test_settings();
    settings.i18n.default_language = "en".to_string();
    settings.features.motivation = false;
    settings
}
