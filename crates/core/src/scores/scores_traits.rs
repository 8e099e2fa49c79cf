use crate::errors::Result;
use crate::scores::scores_model::{NewScoreRecord, ScoreRecord};
use async_trait::async_trait;

/// Trait for score history repository operations
#[async_trait]
pub trait ScoreRepositoryTrait: Send + Sync {
    /// Returns up to `limit` records for the user, newest first.
    fn fetch_recent(&self, user_id: &str, limit: usize) -> Result<Vec<ScoreRecord>>;
    fn fetch_latest(&self, user_id: &str) -> Result<Option<ScoreRecord>>;
    /// Appends a record, assigning its id and timestamp. Never overwrites.
    async fn append(&self, new_record: NewScoreRecord) -> Result<ScoreRecord>;
}

/// Trait for score service operations
pub trait ScoreServiceTrait: Send + Sync {
    fn get_score_history(&self, user_id: &str, limit: usize) -> Result<Vec<ScoreRecord>>;
    fn get_latest_score(&self, user_id: &str) -> Result<Option<ScoreRecord>>;
}
