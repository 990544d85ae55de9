use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// External knowledge-base lookup used when a request supplies a topic name
/// instead of source text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicLookup: Send + Sync {
    /// Returns a plain-text summary for the topic, or NotFound when the
    /// lookup yields nothing usable.
    async fn summarize(&self, topic: &str) -> AppResult<String>;
}

/// Topic lookup backed by the MediaWiki action API (plain-text extracts).
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.wikipedia_api_url.clone(),
        }
    }
}

#[async_trait]
impl TopicLookup for WikipediaClient {
    async fn summarize(&self, topic: &str) -> AppResult<String> {
        debug!("looking up topic: {}", topic);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("titles", topic),
            ])
            .send()
            .await
            .map_err(|e| AppError::ServiceError(format!("topic lookup request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ServiceError(format!(
                "topic lookup returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::ServiceError(format!("topic lookup returned invalid JSON: {}", e)))?;

        match extract_page_text(&body) {
            Some(text) => Ok(text.to_string()),
            None => Err(AppError::NotFound(
                "No content found for the given topic.".to_string(),
            )),
        }
    }
}

/// Pulls the extract out of an action-API query response. Missing pages come
/// back under a "-1" key with no `extract` field, which collapses to `None`
/// here along with empty extracts.
fn extract_page_text(body: &Value) -> Option<&str> {
    let pages = body.pointer("/query/pages")?.as_object()?;
    let extract = pages
        .values()
        .find_map(|page| page.get("extract").and_then(Value::as_str))?;

    let trimmed = extract.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
