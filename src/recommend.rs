//! Movie recommendations
//!
//! A plain one-shot exchange: the user submits a title and gets back a list
//! of similar movies, or an error to display.

use futures::future::BoxFuture;

use crate::api::{ApiError, Recommendation};

mod recommend_state;

pub use recommend_state::{RecommendResponse, RecommendState, RecommendView, error_message};

/// Backend that answers recommendation requests
pub trait RecommendSource: Send + Sync {
    fn fetch_recommendations(
        &self,
        title: String,
    ) -> BoxFuture<'static, Result<Vec<Recommendation>, ApiError>>;
}
