//! Motivation feature tests against a mock picture API

use assert_matches::assert_matches;
use serde_json::json;
use crate::helpers::*;
use StudyBuddy::handlers::callbacks::motivation::handle_motivation;
use StudyBuddy::handlers::handle_callback_query;
use StudyBuddy::services::MotivationService;
use StudyBuddy::state::ConversationState;
use StudyBuddy::models::{InboundEvent, MenuOption};
use StudyBuddy::StudyBuddyError;

#[tokio::test]
async fn test_fetch_picture_url_takes_first_entry() {
    let api = PictureApiMock::new().await;
    api.mock_search(
        200,
        json!([
            { "id": "a", "url": "https://cdn2.thecatapi.com/images/a.jpg" },
            { "id": "b", "url": "https://cdn2.thecatapi.com/images/b.jpg" }
        ]),
    )
    .await;

    let service = MotivationService::new(api.config()).unwrap();
    let url = service.fetch_picture_url().await.expect("picture url");
    assert_eq!(url.as_str(), "https://cdn2.thecatapi.com/images/a.jpg");
}

#[tokio::test]
async fn test_empty_search_result_is_unavailable() {
    let api = PictureApiMock::new().await;
    api.mock_search(200, json!([])).await;

    let service = MotivationService::new(api.config()).unwrap();
    assert_matches!(
        service.fetch_picture_url().await,
        Err(StudyBuddyError::ServiceUnavailable(_))
    );
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let api = PictureApiMock::new().await;
    api.mock_search(500, json!({ "message": "boom" })).await;

    let service = MotivationService::new(api.config()).unwrap();
    assert_matches!(service.fetch_picture_url().await, Err(StudyBuddyError::Http(_)));
}

#[tokio::test]
async fn test_motivate_pairs_picture_and_caption() {
    let api = PictureApiMock::new().await;
    api.mock_picture("https://cdn2.thecatapi.com/images/c.jpg").await;

    let service = MotivationService::new(api.config()).unwrap();
    let motivation = service.motivate().await.unwrap();
    assert_eq!(motivation.caption, "Keep going!");
    assert_eq!(motivation.picture_url.as_str(), "https://cdn2.thecatapi.com/images/c.jpg");
}

#[tokio::test]
async fn test_motivation_button_sends_photo_without_touching_state() {
    let api = PictureApiMock::new().await;
    api.mock_picture("https://cdn2.thecatapi.com/images/d.jpg").await;
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;

    let mut settings = english_settings();
    settings.features.motivation = true;
    settings.motivation = api.config();
    let (services, i18n) = test_services(&settings);

    services
        .conversation
        .handle(&InboundEvent::menu(user_id, MenuOption::EditSchedule));

    handle_callback_query(
        telegram.bot(),
        create_test_callback_query(user_id, "menu:motivation"),
        services.clone(),
        i18n,
    )
    .await
    .expect("motivation handled");

    assert_eq!(telegram.requests_to("sendPhoto").await.len(), 1);
    assert_eq!(
        services.conversation.session(user_id).current_state,
        ConversationState::ChoosingDayForEditSchedule
    );
}

#[tokio::test]
async fn test_failed_fetch_sends_nothing() {
    let api = PictureApiMock::new().await;
    api.mock_search(503, json!({})).await;
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;

    let mut settings = english_settings();
    settings.features.motivation = true;
    settings.motivation = api.config();
    let (services, i18n) = test_services(&settings);

    handle_motivation(telegram.bot(), user_id, Some("en"), services, i18n)
        .await
        .expect("failure is absorbed");

    assert!(telegram.requests_to("sendPhoto").await.is_empty());
}

#[tokio::test]
async fn test_disabled_feature_sends_nothing() {
    let telegram = TelegramMockServer::new().await;
    let user_id = test_user_id();
    telegram.setup_default_mocks(user_id).await;
    let (services, i18n) = test_services(&english_settings());
    assert!(services.motivation.is_none());

    handle_motivation(telegram.bot(), user_id, Some("en"), services, i18n)
        .await
        .unwrap();

    assert!(telegram.requests_to("sendPhoto").await.is_empty());
}
