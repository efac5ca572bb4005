//! Debounced title suggestions
//!
//! Converts the high-frequency stream of edits in the title field into at most
//! one lookup per typing pause, and publishes a lookup's result only while the
//! field still holds the text that lookup was made for.

mod controller;
pub mod suggest_render;
mod title_case;

use futures::future::BoxFuture;

use crate::api::ApiError;

pub use controller::{ControllerEvent, SuggestionController};
pub use title_case::title_case;

/// Inputs shorter than this (in characters) never trigger a lookup
pub const MIN_LENGTH: usize = 2;

/// Quiet period after the last edit before a lookup fires
pub const DEBOUNCE_MS: u64 = 300;

/// Backend that answers partial-title lookups
///
/// The returned future must own everything it needs: it is spawned onto the
/// runtime and may outlive the call that produced it.
pub trait SuggestionSource: Send + Sync {
    fn lookup(&self, partial_title: String) -> BoxFuture<'static, Result<Vec<String>, ApiError>>;
}
