#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use futures::future::BoxFuture;
    use tokio::time::Instant;

    use crate::api::{ApiError, Recommendation};
    use crate::app::App;
    use crate::config::SuggestConfig;
    use crate::recommend::RecommendSource;
    use crate::suggest::{SuggestionController, SuggestionSource};

    /// A canned answer, optionally delivered after a delay
    #[derive(Clone)]
    struct Scripted<T> {
        delay: Duration,
        outcome: Result<T, ApiError>,
    }

    /// Fake search backend answering from a script and recording every call
    ///
    /// Queries without a script entry succeed with no suggestions.
    #[derive(Default)]
    pub struct ScriptedSource {
        replies: Mutex<HashMap<String, Scripted<Vec<String>>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn reply(&self, query: &str, suggestions: &[&str]) {
            self.reply_after(query, Duration::ZERO, suggestions);
        }

        pub fn reply_after(&self, query: &str, delay: Duration, suggestions: &[&str]) {
            let suggestions = suggestions.iter().map(|s| s.to_string()).collect();
            self.replies.lock().unwrap().insert(
                query.to_string(),
                Scripted {
                    delay,
                    outcome: Ok(suggestions),
                },
            );
        }

        pub fn fail(&self, query: &str, error: ApiError) {
            self.fail_after(query, Duration::ZERO, error);
        }

        pub fn fail_after(&self, query: &str, delay: Duration, error: ApiError) {
            self.replies.lock().unwrap().insert(
                query.to_string(),
                Scripted {
                    delay,
                    outcome: Err(error),
                },
            );
        }

        /// Queries looked up so far, in dispatch order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SuggestionSource for ScriptedSource {
        fn lookup(
            &self,
            partial_title: String,
        ) -> BoxFuture<'static, Result<Vec<String>, ApiError>> {
            self.calls.lock().unwrap().push(partial_title.clone());
            let reply = self
                .replies
                .lock()
                .unwrap()
                .get(&partial_title)
                .cloned()
                .unwrap_or(Scripted {
                    delay: Duration::ZERO,
                    outcome: Ok(Vec::new()),
                });

            Box::pin(async move {
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                reply.outcome
            })
        }
    }

    /// Fake recommendation backend, same conventions as [`ScriptedSource`]
    #[derive(Default)]
    pub struct ScriptedRecommender {
        replies: Mutex<HashMap<String, Scripted<Vec<Recommendation>>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRecommender {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn reply_after(&self, title: &str, delay: Duration, titles: &[(&str, f64)]) {
            let recommendations = titles
                .iter()
                .map(|(title, score)| Recommendation {
                    title: title.to_string(),
                    score: Some(*score),
                })
                .collect();
            self.replies.lock().unwrap().insert(
                title.to_string(),
                Scripted {
                    delay,
                    outcome: Ok(recommendations),
                },
            );
        }

        pub fn fail(&self, title: &str, error: ApiError) {
            self.replies.lock().unwrap().insert(
                title.to_string(),
                Scripted {
                    delay: Duration::ZERO,
                    outcome: Err(error),
                },
            );
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RecommendSource for ScriptedRecommender {
        fn fetch_recommendations(
            &self,
            title: String,
        ) -> BoxFuture<'static, Result<Vec<Recommendation>, ApiError>> {
            self.calls.lock().unwrap().push(title.clone());
            let reply = self
                .replies
                .lock()
                .unwrap()
                .get(&title)
                .cloned()
                .unwrap_or(Scripted {
                    delay: Duration::ZERO,
                    outcome: Ok(Vec::new()),
                });

            Box::pin(async move {
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                reply.outcome
            })
        }
    }

    pub fn test_controller(source: &Arc<ScriptedSource>) -> SuggestionController {
        SuggestionController::new(source.clone())
    }

    pub fn test_app(source: &Arc<ScriptedSource>, recommender: &Arc<ScriptedRecommender>) -> App {
        App::with_sources(
            source.clone(),
            recommender.clone(),
            &SuggestConfig::default(),
        )
    }

    /// Handle controller events for `window` of (usually paused) time
    pub async fn pump(controller: &mut SuggestionController, window: Duration) {
        let deadline = Instant::now() + window;
        while let Ok(Some(event)) = tokio::time::timeout_at(deadline, controller.next_event()).await
        {
            controller.handle_event(event);
        }
    }

    /// Handle app messages for `window` of (usually paused) time
    pub async fn pump_app(app: &mut App, window: Duration) {
        let deadline = Instant::now() + window;
        while let Ok(Some(message)) = tokio::time::timeout_at(deadline, app.next_message()).await {
            app.handle_message(message);
        }
    }
}
