//! Request bodies and response envelopes for the movie endpoints

use serde::{Deserialize, Serialize};

use super::ApiError;

/// Fallback shown when a rejected search carries no message
const SEARCH_REJECTED: &str = "Title search unavailable.";

/// Fallback shown when a rejected recommendation carries no message
const RECOMMEND_REJECTED: &str = "Could not find recommendations.";

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub partial_title: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendRequest<'a> {
    pub title: &'a str,
}

/// A single recommended movie
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub title: String,
    /// Cosine similarity to the requested title, when the backend reports it
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a search response
///
/// Only a 2xx body that decodes with `success: true` yields suggestions.
pub fn parse_search_response(status: u16, body: &str) -> Result<Vec<String>, ApiError> {
    if !is_success_status(status) {
        return Err(status_error(status, body, SEARCH_REJECTED));
    }

    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    if envelope.success {
        Ok(envelope.suggestions)
    } else {
        Err(ApiError::Rejected(
            envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| SEARCH_REJECTED.to_string()),
        ))
    }
}

/// Interpret a recommendation response
pub fn parse_recommend_response(status: u16, body: &str) -> Result<Vec<Recommendation>, ApiError> {
    if !is_success_status(status) {
        return Err(status_error(status, body, RECOMMEND_REJECTED));
    }

    let envelope: RecommendEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    if envelope.success {
        Ok(envelope.recommendations)
    } else {
        Err(ApiError::Rejected(
            envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| RECOMMEND_REJECTED.to_string()),
        ))
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build a status error, preferring the envelope's own message
///
/// A body that is not a JSON object is a parse failure; the raw text of an
/// error page is never passed on as a message.
fn status_error(code: u16, body: &str, fallback: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => ApiError::Status {
            code,
            message: b
                .error
                .or(b.message)
                .unwrap_or_else(|| fallback.to_string()),
        },
        Err(e) => ApiError::Parse(format!("HTTP {code} with unreadable body: {e}")),
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod envelope_tests;
