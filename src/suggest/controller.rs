//! Suggestion controller
//!
//! Owns the title field's text and its suggestion list. Every mutation of the
//! text bumps an epoch; debounce timers and lookups are tagged with the epoch
//! current when they were scheduled, and their results are applied only if
//! the epoch has not moved on since.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::{DEBOUNCE_MS, MIN_LENGTH, SuggestionSource, title_case};
use crate::api::ApiError;
use crate::config::SuggestConfig;

/// Messages sent back to the controller by its timer and lookup tasks
#[derive(Debug)]
pub enum ControllerEvent {
    /// The debounce timer scheduled at `epoch` ran to completion
    TimerFired { epoch: u64 },
    /// The lookup dispatched at `epoch` finished
    LookupSettled {
        epoch: u64,
        /// Text the lookup was made for
        query: String,
        outcome: Result<Vec<String>, ApiError>,
    },
}

/// The single debounce timer a controller may have scheduled
struct PendingTimer {
    epoch: u64,
    cancel_token: CancellationToken,
}

/// Debounced lookup policy for one input field
///
/// Must be used from within a tokio runtime: timers and lookups are spawned
/// as tasks. All state changes happen through `&mut self`, so whoever owns the
/// controller serializes them.
pub struct SuggestionController {
    source: Arc<dyn SuggestionSource>,
    debounce: Duration,
    min_length: usize,
    query: String,
    suggestions: Vec<String>,
    pending: Option<PendingTimer>,
    /// Incremented on every change to `query`
    epoch: u64,
    /// Epoch of the most recently dispatched lookup that has not settled
    in_flight_epoch: Option<u64>,
    event_tx: UnboundedSender<ControllerEvent>,
    event_rx: UnboundedReceiver<ControllerEvent>,
}

impl SuggestionController {
    /// Create a controller with the default debounce interval and threshold
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        Self::with_settings(source, Duration::from_millis(DEBOUNCE_MS), MIN_LENGTH)
    }

    /// Create a controller using the `[suggest]` config section
    pub fn with_config(source: Arc<dyn SuggestionSource>, config: &SuggestConfig) -> Self {
        Self::with_settings(
            source,
            Duration::from_millis(config.debounce_ms),
            config.min_length,
        )
    }

    pub fn with_settings(
        source: Arc<dyn SuggestionSource>,
        debounce: Duration,
        min_length: usize,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            source,
            debounce,
            min_length,
            query: String::new(),
            suggestions: Vec::new(),
            pending: None,
            epoch: 0,
            in_flight_epoch: None,
            event_tx,
            event_rx,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a lookup for the current text is still awaiting its response
    pub fn is_lookup_in_flight(&self) -> bool {
        self.in_flight_epoch == Some(self.epoch)
    }

    /// Record an edit of the field
    ///
    /// Replaces any scheduled lookup. Text below the minimum length clears the
    /// suggestions straight away and schedules nothing.
    pub fn on_text_changed(&mut self, new_value: &str) {
        self.cancel_pending_timer();
        self.query = new_value.to_string();
        self.epoch = self.epoch.wrapping_add(1);

        if new_value.chars().count() < self.min_length {
            self.suggestions.clear();
            return;
        }

        self.schedule_timer();
    }

    /// Record that the user picked `choice` from the suggestion list
    pub fn on_suggestion_accepted(&mut self, choice: &str) {
        self.cancel_pending_timer();
        self.query = title_case(choice);
        self.epoch = self.epoch.wrapping_add(1);
        self.suggestions.clear();
        log::debug!("Accepted suggestion {:?}", self.query);
    }

    /// Abandon any scheduled or in-flight lookup and clear the suggestions
    ///
    /// The query is kept; the next edit starts a fresh debounce.
    pub fn dismiss(&mut self) {
        self.cancel_pending_timer();
        self.epoch = self.epoch.wrapping_add(1);
        self.suggestions.clear();
    }

    /// Wait for the next message from a timer or lookup task
    ///
    /// Cancel safe: an event that is not returned stays queued.
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        self.event_rx.recv().await
    }

    /// Apply an event produced by this controller's tasks
    ///
    /// Returns true if the suggestion list was replaced or cleared.
    pub fn handle_event(&mut self, event: ControllerEvent) -> bool {
        match event {
            ControllerEvent::TimerFired { epoch } => {
                self.on_timer_fired(epoch);
                false
            }
            ControllerEvent::LookupSettled {
                epoch,
                query,
                outcome,
            } => self.on_lookup_settled(epoch, &query, outcome),
        }
    }

    /// Apply every event already queued, without waiting
    ///
    /// Returns true if any of them changed the suggestion list.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            changed |= self.handle_event(event);
        }
        changed
    }

    fn schedule_timer(&mut self) {
        let epoch = self.epoch;
        let cancel_token = CancellationToken::new();
        let task_token = cancel_token.clone();
        let event_tx = self.event_tx.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(debounce) => {
                    let _ = event_tx.send(ControllerEvent::TimerFired { epoch });
                }
            }
        });

        self.pending = Some(PendingTimer {
            epoch,
            cancel_token,
        });
    }

    fn cancel_pending_timer(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel_token.cancel();
        }
    }

    fn on_timer_fired(&mut self, epoch: u64) {
        // A fire queued just before cancellation carries an old epoch
        let is_current = self.pending.as_ref().is_some_and(|t| t.epoch == epoch);
        if !is_current {
            log::trace!("Ignoring fire of cancelled timer {}", epoch);
            return;
        }
        self.pending = None;
        self.dispatch_lookup(epoch);
    }

    fn dispatch_lookup(&mut self, epoch: u64) {
        let query = self.query.clone();
        log::debug!("Dispatching title lookup {} for {:?}", epoch, query);

        let lookup = self.source.lookup(query.clone());
        let event_tx = self.event_tx.clone();
        self.in_flight_epoch = Some(epoch);

        tokio::spawn(async move {
            let outcome = lookup.await;
            let _ = event_tx.send(ControllerEvent::LookupSettled {
                epoch,
                query,
                outcome,
            });
        });
    }

    fn on_lookup_settled(
        &mut self,
        epoch: u64,
        query: &str,
        outcome: Result<Vec<String>, ApiError>,
    ) -> bool {
        if self.in_flight_epoch == Some(epoch) {
            self.in_flight_epoch = None;
        }

        if epoch != self.epoch {
            log::debug!(
                "Dropping stale lookup {} for {:?} (current: {})",
                epoch,
                query,
                self.epoch
            );
            return false;
        }

        match outcome {
            Ok(suggestions) => {
                log::debug!("Lookup {} returned {} suggestions", epoch, suggestions.len());
                self.suggestions = suggestions;
            }
            Err(e) => {
                log::warn!("Title lookup for {:?} failed: {}", query, e);
                self.suggestions.clear();
            }
        }
        true
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.cancel_pending_timer();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
