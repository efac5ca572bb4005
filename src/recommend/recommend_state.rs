//! Recommendation request state
//!
//! Tracks loading, error and results for the recommend action. Each request
//! gets an id; a response is applied only if its id is the latest one issued.

use crate::api::{ApiError, Recommendation};

/// Shown when the backend could not be reached or gave an unreadable answer
const NETWORK_ERROR: &str = "Network error: could not reach the recommendation engine.";

/// Response delivered back from a recommendation task
#[derive(Debug)]
pub struct RecommendResponse {
    pub request_id: u64,
    pub outcome: Result<Vec<Recommendation>, ApiError>,
}

/// What the recommendations pane should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecommendView<'a> {
    /// Nothing requested yet
    Placeholder,
    Loading,
    Error(&'a str),
    /// Request succeeded but matched nothing
    Empty,
    Results(&'a [Recommendation]),
}

/// State of the recommendations pane
#[derive(Debug, Default)]
pub struct RecommendState {
    pub loading: bool,
    pub error: Option<String>,
    /// `None` until a request has completed
    pub results: Option<Vec<Recommendation>>,
    /// Id of the latest request, incremented for each new request
    pub request_id: u64,
}

impl RecommendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request for `title`
    ///
    /// A blank title resets the pane and issues nothing. Otherwise previous
    /// results and error are cleared and the new request id is returned.
    pub fn start(&mut self, title: &str) -> Option<u64> {
        self.error = None;
        self.results = None;

        if title.trim().is_empty() {
            self.loading = false;
            // Orphan whatever is still in flight
            self.request_id = self.request_id.wrapping_add(1);
            return None;
        }

        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        Some(self.request_id)
    }

    /// Apply a response
    ///
    /// Returns false (and changes nothing) if the response belongs to a
    /// superseded request.
    pub fn complete(&mut self, response: RecommendResponse) -> bool {
        if response.request_id != self.request_id {
            log::debug!(
                "Ignoring stale recommendation response {} (current: {})",
                response.request_id,
                self.request_id
            );
            return false;
        }

        self.loading = false;
        match response.outcome {
            Ok(results) => {
                self.error = None;
                self.results = Some(results);
            }
            Err(e) => {
                log::warn!("Recommendation request failed: {}", e);
                self.error = Some(error_message(&e));
                self.results = Some(Vec::new());
            }
        }
        true
    }

    pub fn view(&self) -> RecommendView<'_> {
        if self.loading {
            return RecommendView::Loading;
        }
        if let Some(error) = &self.error {
            return RecommendView::Error(error);
        }
        match &self.results {
            None => RecommendView::Placeholder,
            Some(results) if results.is_empty() => RecommendView::Empty,
            Some(results) => RecommendView::Results(results),
        }
    }
}

/// User-facing text for a failed request
pub fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) | ApiError::Parse(_) | ApiError::InvalidUrl(_) => {
            NETWORK_ERROR.to_string()
        }
        ApiError::Status { message, .. } | ApiError::Rejected(message) => message.clone(),
    }
}

#[cfg(test)]
#[path = "recommend_state_tests.rs"]
mod recommend_state_tests;
