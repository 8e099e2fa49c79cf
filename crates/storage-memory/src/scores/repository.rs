use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use ecotrack_core::errors::Result;
use ecotrack_core::scores::{NewScoreRecord, ScoreRecord, ScoreRepositoryTrait};

use crate::locks::{read_guard, write_guard};

const STORE: &str = "score";

/// Append-only score history, one newest-first vector per user.
pub struct InMemoryScoreRepository {
    records: RwLock<HashMap<String, Vec<ScoreRecord>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        InMemoryScoreRepository {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreRepositoryTrait for InMemoryScoreRepository {
    fn fetch_recent(&self, user_id: &str, limit: usize) -> Result<Vec<ScoreRecord>> {
        let records = read_guard(&self.records, STORE)?;
        Ok(records
            .get(user_id)
            .map(|history| history.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn fetch_latest(&self, user_id: &str) -> Result<Option<ScoreRecord>> {
        let records = read_guard(&self.records, STORE)?;
        Ok(records
            .get(user_id)
            .and_then(|history| history.first().cloned()))
    }

    async fn append(&self, new_record: NewScoreRecord) -> Result<ScoreRecord> {
        let record = ScoreRecord {
            id: Uuid::new_v4().to_string(),
            user_id: new_record.user_id,
            created_at: Utc::now(),
            weekly_kg_co2e: new_record.weekly_kg_co2e,
            breakdown: Some(new_record.breakdown),
            survey: Some(new_record.survey),
        };

        let mut records = write_guard(&self.records, STORE)?;
        // Records are stamped on the way in, so the front stays newest.
        records
            .entry(record.user_id.clone())
            .or_default()
            .insert(0, record.clone());

        debug!(
            "Appended score record {} for user {}",
            record.id, record.user_id
        );
        Ok(record)
    }
}
