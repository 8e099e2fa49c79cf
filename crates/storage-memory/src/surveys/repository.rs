use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use ecotrack_core::errors::Result;
use ecotrack_core::footprint::{SurveyInput, SurveyRepositoryTrait};

use crate::locks::{read_guard, write_guard};

const STORE: &str = "survey";

/// Latest raw survey per user, overwritten on every save.
pub struct InMemorySurveyRepository {
    snapshots: RwLock<HashMap<String, SurveyInput>>,
}

impl InMemorySurveyRepository {
    pub fn new() -> Self {
        InMemorySurveyRepository {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySurveyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurveyRepositoryTrait for InMemorySurveyRepository {
    fn get_survey(&self, user_id: &str) -> Result<Option<SurveyInput>> {
        let snapshots = read_guard(&self.snapshots, STORE)?;
        Ok(snapshots.get(user_id).cloned())
    }

    async fn save_survey(&self, user_id: &str, survey: &SurveyInput) -> Result<()> {
        let mut snapshots = write_guard(&self.snapshots, STORE)?;
        snapshots.insert(user_id.to_string(), survey.clone());
        Ok(())
    }
}
