//! Terminal front end for the SmartAIHub movie recommender
//!
//! The interesting part lives in [`suggest`]: a debounced, staleness-checked
//! title autocomplete. The rest is the HTTP client, configuration and the
//! ratatui page that hosts it.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod recommend;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
