// Configuration type definitions

use serde::Deserialize;

use crate::suggest::{DEBOUNCE_MS, MIN_LENGTH};

/// Default backend location (the Flask dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Backend connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Title suggestion section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub debounce_ms: u64,
    pub min_length: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: DEBOUNCE_MS,
            min_length: MIN_LENGTH,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}
