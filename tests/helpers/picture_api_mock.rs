//! Mock picture API server for testing
//!
//! Simulates the image search endpoint used by the motivation feature.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use StudyBuddy::config::MotivationConfig;

/// Mock picture API server
pub struct PictureApiMock {
    pub server: MockServer,
}

impl PictureApiMock {
    /// Start a new mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Motivation configuration pointing at this server
    pub fn config(&self) -> MotivationConfig {
        MotivationConfig {
            api_url: self.server.uri(),
            timeout_seconds: 2,
            captions: vec!["Keep going!".to_string()],
        }
    }

    /// Respond to image searches with the given body and status
    pub async fn mock_search(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/images/search"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with a single picture
    pub async fn mock_picture(&self, url: &str) {
        self.mock_search(
            200,
            json!([{ "id": "abc", "url": url, "width": 640, "height": 480 }]),
        )
        .await;
    }
}
