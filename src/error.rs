use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

/// Custom error types for smartaihub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
