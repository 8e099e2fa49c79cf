use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;

use ecotrack_core::achievements::AchievementRepositoryTrait;
use ecotrack_core::errors::Result;

use crate::locks::{read_guard, write_guard};

const STORE: &str = "achievement";

/// Unlocked rule ids, one set per user.
///
/// The set-insert makes `add_unlocked_id` idempotent, so concurrent award
/// passes for the same user cannot produce duplicate unlocks.
pub struct InMemoryAchievementRepository {
    unlocked: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        InMemoryAchievementRepository {
            unlocked: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAchievementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AchievementRepositoryTrait for InMemoryAchievementRepository {
    fn get_unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>> {
        let unlocked = read_guard(&self.unlocked, STORE)?;
        Ok(unlocked.get(user_id).cloned().unwrap_or_default())
    }

    async fn add_unlocked_id(&self, user_id: &str, rule_id: &str) -> Result<()> {
        let mut unlocked = write_guard(&self.unlocked, STORE)?;
        let inserted = unlocked
            .entry(user_id.to_string())
            .or_default()
            .insert(rule_id.to_string());
        if inserted {
            debug!("Unlocked achievement {} for user {}", rule_id, user_id);
        }
        Ok(())
    }

    async fn remove_unlocked_id(&self, user_id: &str, rule_id: &str) -> Result<()> {
        let mut unlocked = write_guard(&self.unlocked, STORE)?;
        if let Some(ids) = unlocked.get_mut(user_id) {
            ids.remove(rule_id);
        }
        Ok(())
    }
}
