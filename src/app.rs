//! Movie page application state
//!
//! One title field bound to one suggestion controller, plus the
//! recommendations pane. Terminal input, controller events and recommendation
//! responses are all applied from the single UI loop.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::ApiClient;
use crate::config::SuggestConfig;
use crate::input::InputState;
use crate::recommend::{RecommendResponse, RecommendSource, RecommendState};
use crate::suggest::{ControllerEvent, SuggestionController, SuggestionSource};

mod app_events;
mod app_render;

/// Work finished in the background, waiting to be applied to the app
#[derive(Debug)]
pub enum AppMessage {
    Suggest(ControllerEvent),
    Recommend(RecommendResponse),
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionController,
    pub recommend: RecommendState,
    /// Highlighted row of the suggestion popup
    selected: Option<usize>,
    /// Esc hides the popup until the list or the text changes
    popup_visible: bool,
    recommender: Arc<dyn RecommendSource>,
    recommend_tx: UnboundedSender<RecommendResponse>,
    recommend_rx: UnboundedReceiver<RecommendResponse>,
    should_quit: bool,
}

impl App {
    /// Create an app talking to the real backend
    pub fn new(client: ApiClient, config: &SuggestConfig) -> Self {
        let client = Arc::new(client);
        Self::with_sources(client.clone(), client, config)
    }

    pub fn with_sources(
        suggestion_source: Arc<dyn SuggestionSource>,
        recommender: Arc<dyn RecommendSource>,
        config: &SuggestConfig,
    ) -> Self {
        let (recommend_tx, recommend_rx) = mpsc::unbounded_channel();
        Self {
            input: InputState::new(),
            suggestions: SuggestionController::with_config(suggestion_source, config),
            recommend: RecommendState::new(),
            selected: None,
            popup_visible: true,
            recommender,
            recommend_tx,
            recommend_rx,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Suggestions the popup should show right now
    pub fn visible_suggestions(&self) -> &[String] {
        if self.popup_visible {
            self.suggestions.suggestions()
        } else {
            &[]
        }
    }

    pub fn selected_suggestion_index(&self) -> Option<usize> {
        self.selected
    }

    /// Wait for the next piece of background work to finish
    ///
    /// Cancel safe, so it can sit in a `select!` next to terminal input.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        tokio::select! {
            Some(event) = self.suggestions.next_event() => Some(AppMessage::Suggest(event)),
            Some(response) = self.recommend_rx.recv() => Some(AppMessage::Recommend(response)),
            else => None,
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Suggest(event) => {
                if self.suggestions.handle_event(event) {
                    self.reset_selection();
                    self.popup_visible = true;
                }
            }
            AppMessage::Recommend(response) => {
                self.recommend.complete(response);
            }
        }
        self.input
            .set_searching(self.suggestions.is_lookup_in_flight());
    }

    /// Ask the backend for movies similar to the field's current text
    pub fn request_recommendations(&mut self) {
        self.suggestions.dismiss();
        self.reset_selection();
        self.input.set_searching(false);

        let title = self.input.text().trim().to_string();
        let Some(request_id) = self.recommend.start(&title) else {
            return;
        };

        log::info!("Requesting recommendations for {:?}", title);
        let lookup = self.recommender.fetch_recommendations(title);
        let response_tx = self.recommend_tx.clone();
        tokio::spawn(async move {
            let outcome = lookup.await;
            let _ = response_tx.send(RecommendResponse {
                request_id,
                outcome,
            });
        });
    }

    fn reset_selection(&mut self) {
        self.selected = if self.suggestions.suggestions().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}
