//! Async client for the SmartAIHub movie endpoints

use std::time::Duration;

use futures::future::BoxFuture;
use serde::Serialize;

use super::ApiError;
use super::envelope::{
    Recommendation, RecommendRequest, SearchRequest, parse_recommend_response,
    parse_search_response,
};
use crate::config::ApiConfig;
use crate::error::HubError;
use crate::recommend::RecommendSource;
use crate::suggest::SuggestionSource;

/// Title search endpoint, answered with `{success, suggestions}`
const SEARCH_PATH: &str = "/api/search_movies";

/// Recommendation endpoint, answered with `{success, recommendations}`
const RECOMMEND_PATH: &str = "/api/recommend_movies";

/// HTTP client bound to one backend base URL
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        match reqwest::Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ApiError::InvalidUrl(base_url)),
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, HubError> {
        let client = Self::new(
            config.base_url.clone(),
            Duration::from_millis(config.timeout_ms),
        )?;
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up titles starting with or resembling `partial_title`
    pub async fn search_titles(&self, partial_title: &str) -> Result<Vec<String>, ApiError> {
        let (status, body) = self
            .post_json(SEARCH_PATH, &SearchRequest { partial_title })
            .await?;
        parse_search_response(status, &body)
    }

    /// Fetch movies similar to `title`
    pub async fn recommend(&self, title: &str) -> Result<Vec<Recommendation>, ApiError> {
        let (status, body) = self
            .post_json(RECOMMEND_PATH, &RecommendRequest { title })
            .await?;
        parse_recommend_response(status, &body)
    }

    /// POST a JSON body and return the status with the raw response text
    ///
    /// Status interpretation is left to the envelope parsers so that error
    /// bodies can contribute their message.
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(u16, String), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok((status, text))
    }
}

impl SuggestionSource for ApiClient {
    fn lookup(&self, partial_title: String) -> BoxFuture<'static, Result<Vec<String>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.search_titles(&partial_title).await })
    }
}

impl RecommendSource for ApiClient {
    fn fetch_recommendations(
        &self,
        title: String,
    ) -> BoxFuture<'static, Result<Vec<Recommendation>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.recommend(&title).await })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
