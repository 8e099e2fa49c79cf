use std::collections::HashSet;

use crate::errors::Result;
use async_trait::async_trait;

use super::achievements_model::{AchievementProgress, AchievementRule, AchievementSummary};

/// Trait for unlocked-achievement repository operations
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn get_unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>>;
    /// Must be idempotent: adding an id that is already present succeeds
    /// without effect, so concurrent duplicate awards collapse to one.
    async fn add_unlocked_id(&self, user_id: &str, rule_id: &str) -> Result<()>;
    async fn remove_unlocked_id(&self, user_id: &str, rule_id: &str) -> Result<()>;
}

/// Trait for achievement service operations
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    /// Progress for every catalog rule. Degrades to an empty list if the
    /// score history cannot be read.
    fn check_achievement_progress(&self, user_id: &str) -> Result<Vec<AchievementProgress>>;
    /// Persists unlocks for every rule at 100% that is not yet unlocked and
    /// returns the newly unlocked rules, in catalog order.
    async fn check_and_award_achievements(&self, user_id: &str) -> Result<Vec<AchievementRule>>;
    /// Fast-path unlock of the first-submission rule. Returns true only when
    /// this call performed the unlock.
    async fn award_first_step(&self, user_id: &str) -> Result<bool>;
    fn get_unlocked(&self, user_id: &str) -> Result<HashSet<String>>;
    /// Administrative: revokes an unlock, e.g. after a data correction.
    async fn remove_achievement(&self, user_id: &str, rule_id: &str) -> Result<()>;
    fn achievement_summary(&self, user_id: &str) -> Result<AchievementSummary>;
}
