//! Motivation service implementation
//!
//! Fetches a random cat picture from a public image API and pairs it with a
//! motivational caption from the configuration.

use std::time::Duration;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use crate::config::MotivationConfig;
use crate::utils::errors::{StudyBuddyError, Result};

/// One entry of the image search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PictureEntry {
    pub id: Option<String>,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A picture together with the caption to send under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motivation {
    pub picture_url: Url,
    pub caption: String,
}

/// Service for the "dose of motivation" button
#[derive(Clone, Debug)]
pub struct MotivationService {
    client: Client,
    config: MotivationConfig,
}

impl MotivationService {
    /// Create a new MotivationService instance
    pub fn new(config: MotivationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("StudyBuddy-Bot/1.0")
            .build()?;

        Ok(Self { client, config })
    }

    /// URL of the image search endpoint
    fn search_endpoint(&self) -> String {
        format!("{}/v1/images/search", self.config.api_url.trim_end_matches('/'))
    }

    /// Ask the image API for a random picture and return its URL
    pub async fn fetch_picture_url(&self) -> Result<Url> {
        let endpoint = self.search_endpoint();
        debug!(endpoint = %endpoint, "Requesting motivation picture");

        let entries: Vec<PictureEntry> = self
            .client
            .get(&endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entry = entries.into_iter().next().ok_or_else(|| {
            StudyBuddyError::ServiceUnavailable("Picture API returned no images".to_string())
        })?;

        Ok(Url::parse(&entry.url)?)
    }

    /// Pick a random caption
    pub fn pick_caption(&self) -> String {
        self.config
            .captions
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }

    /// Fetch a picture and pick a caption for it
    pub async fn motivate(&self) -> Result<Motivation> {
        let picture_url = self.fetch_picture_url().await?;
        Ok(Motivation {
            picture_url,
            caption: self.pick_caption(),
        })
    }
}
