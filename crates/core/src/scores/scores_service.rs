use std::sync::Arc;

use log::warn;

use crate::errors::Result;

use super::scores_model::ScoreRecord;
use super::scores_traits::{ScoreRepositoryTrait, ScoreServiceTrait};

/// Read side of the score history.
///
/// Reads degrade on storage failure: dashboards render "no data yet" instead
/// of an error screen, and the warning lands in the log. Writes go through
/// the footprint submission flow, which does propagate errors.
pub struct ScoreService {
    score_repository: Arc<dyn ScoreRepositoryTrait>,
}

impl ScoreService {
    pub fn new(score_repository: Arc<dyn ScoreRepositoryTrait>) -> Self {
        ScoreService { score_repository }
    }
}

impl ScoreServiceTrait for ScoreService {
    fn get_score_history(&self, user_id: &str, limit: usize) -> Result<Vec<ScoreRecord>> {
        match self.score_repository.fetch_recent(user_id, limit) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    "Failed to read score history for user {}: {}. Returning empty history.",
                    user_id, e
                );
                Ok(Vec::new())
            }
        }
    }

    fn get_latest_score(&self, user_id: &str) -> Result<Option<ScoreRecord>> {
        match self.score_repository.fetch_latest(user_id) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!("Failed to read latest score for user {}: {}", user_id, e);
                Ok(None)
            }
        }
    }
}
