//! Transport adapter tests
//!
//! Commands, callbacks and messages are turned into engine events, and engine
//! responses come back out as sendMessage calls with the right keyboard.

use crate::helpers::*;
use StudyBuddy::handlers::{
    commands::start::handle_start, handle_callback_query, handle_message,
};
use StudyBuddy::models::{ResourceKind, Weekday};
use StudyBuddy::state::ConversationState;

fn callback_data_of(message: &serde_json::Value) -> Vec<String> {
    message["reply_markup"]["inline_keyboard"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|row| row.as_array())
        .flatten()
        .filter_map(|button| button["callback_data"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_start_sends_greeting_with_main_menu() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;

    let (services, i18n) = test_services(&english_settings());
    handle_start(telegram.bot(), create_test_message(user_id, "/start"), services.clone(), i18n)
        .await
        .expect("start handled");

    let sent = telegram.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["chat_id"], user_id);
    assert!(sent[0]["text"].as_str().unwrap().starts_with("Hi, tester!"));
    assert_eq!(
        callback_data_of(&sent[0]),
        vec!["menu:view_schedule", "menu:view_homework", "menu:edit_homework", "menu:edit_schedule"]
    );
    assert!(services.conversation.resources().get(user_id, ResourceKind::Homework).is_some());
}

#[tokio::test]
async fn test_full_edit_flow_through_handlers() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());

    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "menu:edit_homework"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .expect("menu callback handled");

    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "weekday:thursday"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .expect("weekday callback handled");

    handle_message(
        telegram.bot(),
        create_test_message(user_id, "Physics: lab report"),
        services.clone(),
        i18n,
    )
    .await
    .expect("text handled");

    let sent = telegram.sent_messages().await;
    assert_eq!(sent.len(), 3);
    assert_eq!(callback_data_of(&sent[0]).len(), 7);
    assert!(callback_data_of(&sent[1]).is_empty());
    assert_eq!(sent[2]["text"], "Your assignments:\nPhysics: lab report");

    assert_eq!(telegram.requests_to("answerCallbackQuery").await.len(), 2);

    let homework = services.conversation.resources().get(user_id, ResourceKind::Homework).unwrap();
    assert_eq!(homework.get_day(Weekday::Thursday).as_deref(), Some("Physics: lab report"));
    assert_eq!(services.conversation.session(user_id).current_state, ConversationState::Idle);
}

#[tokio::test]
async fn test_stray_text_sends_nothing() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());

    handle_message(telegram.bot(), create_test_message(user_id, "hi"), services, i18n)
        .await
        .expect("text handled");

    assert!(telegram.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_group_messages_are_ignored() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());

    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "menu:edit_schedule"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .unwrap();
    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "weekday:monday"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .unwrap();

    handle_message(
        telegram.bot(),
        create_group_message(user_id, -1001234567890, "Group chatter"),
        services.clone(),
        i18n,
    )
    .await
    .unwrap();

    assert_eq!(
        services.conversation.session(user_id).snapshot(),
        (ConversationState::AwaitingScheduleText, Some(Weekday::Monday))
    );
}

#[tokio::test]
async fn test_unknown_callback_is_answered_but_ignored() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());

    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "lang:en"),
        services,
        i18n,
    )
    .await
    .expect("callback handled");

    assert_eq!(telegram.requests_to("answerCallbackQuery").await.len(), 1);
    assert!(telegram.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_replies_and_keyboards_use_client_language() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());

    handle_callback_query(
        telegram.bot(),
        create_localized_callback_query(user_id, "menu:edit_schedule", "ru"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .unwrap();
    handle_callback_query(
        telegram.bot(),
        create_localized_callback_query(user_id, "weekday:monday", "ru"),
        services.clone(),
        i18n.clone(),
    )
    .await
    .unwrap();
    handle_message(
        telegram.bot(),
        create_localized_message(user_id, "Математика", "ru"),
        services,
        i18n,
    )
    .await
    .unwrap();

    let sent = telegram.sent_messages().await;
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0]["reply_markup"]["inline_keyboard"][0][0]["text"], "Понедельник");
    assert_eq!(sent[2]["text"], "Твоё расписание:\nМатематика");
}
