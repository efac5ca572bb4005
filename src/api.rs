//! SmartAIHub HTTP API
//!
//! Typed client for the movie endpoints of the backend. Every endpoint answers
//! with a JSON envelope whose `success` flag signals logical success
//! independently of the HTTP status.

use thiserror::Error;

mod client;
mod envelope;

pub use client::ApiClient;
pub use envelope::{Recommendation, parse_recommend_response, parse_search_response};

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connection, timeout or body transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("API error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Body was not the JSON shape we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base URL {0:?}")]
    InvalidUrl(String),

    /// Envelope arrived without `success: true`
    #[error("Request rejected: {0}")]
    Rejected(String),
}
