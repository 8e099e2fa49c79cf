use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};
use rust_decimal::Decimal;

use crate::constants::{COMPLETION_DECIMAL_PRECISION, DEFAULT_HISTORY_WINDOW};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::scores::ScoreRepositoryTrait;

use super::achievements_catalog::{all_rules, rule_by_id, FIRST_STEP_RULE_ID};
use super::achievements_evaluator::evaluate_rule;
use super::achievements_model::{AchievementProgress, AchievementRule, AchievementSummary};
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};

/// Evaluates the rule catalog against score history and records unlocks.
///
/// Unlocks are write-once: the persisted set only grows (admin removal
/// aside), and evaluation never un-unlocks anything.
pub struct AchievementService {
    score_repository: Arc<dyn ScoreRepositoryTrait>,
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    history_window: usize,
}

impl AchievementService {
    pub fn new(
        score_repository: Arc<dyn ScoreRepositoryTrait>,
        achievement_repository: Arc<dyn AchievementRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        AchievementService {
            score_repository,
            achievement_repository,
            event_sink,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Overrides how many history records an evaluation scans.
    pub fn with_history_window(mut self, history_window: usize) -> Self {
        self.history_window = history_window;
        self
    }

    /// Reads the unlocked set, treating a failed read as an empty set. A
    /// missed membership at worst delays an award to the next pass; the
    /// idempotent store add keeps a repeat award harmless.
    fn unlocked_or_empty(&self, user_id: &str) -> HashSet<String> {
        match self.achievement_repository.get_unlocked_ids(user_id) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(
                    "Failed to read unlocked achievements for user {}: {}. Treating as none.",
                    user_id, e
                );
                HashSet::new()
            }
        }
    }

    fn evaluate_all(&self, user_id: &str) -> Result<Vec<AchievementProgress>> {
        let records = self
            .score_repository
            .fetch_recent(user_id, self.history_window)?;
        let unlocked = self.unlocked_or_empty(user_id);
        Ok(all_rules()
            .iter()
            .map(|rule| evaluate_rule(rule, &records, &unlocked))
            .collect())
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    fn check_achievement_progress(&self, user_id: &str) -> Result<Vec<AchievementProgress>> {
        match self.evaluate_all(user_id) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                warn!(
                    "Failed to evaluate achievements for user {}: {}. Returning empty progress.",
                    user_id, e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn check_and_award_achievements(&self, user_id: &str) -> Result<Vec<AchievementRule>> {
        let progress = match self.evaluate_all(user_id) {
            Ok(progress) => progress,
            Err(e) => {
                warn!(
                    "Failed to evaluate achievements for user {}: {}. Skipping award pass.",
                    user_id, e
                );
                return Ok(Vec::new());
            }
        };

        let mut newly_unlocked = Vec::new();
        for entry in progress {
            if entry.is_unlocked || entry.progress_pct < Decimal::ONE_HUNDRED {
                continue;
            }
            match self
                .achievement_repository
                .add_unlocked_id(user_id, &entry.rule.id)
                .await
            {
                Ok(()) => newly_unlocked.push(entry.rule),
                Err(e) => {
                    // Not added to the result: only persisted unlocks get
                    // celebrated. The rule stays locked and the next pass
                    // retries the write.
                    error!(
                        "Failed to persist unlock {} for user {}: {}",
                        entry.rule.id, user_id, e
                    );
                }
            }
        }

        if !newly_unlocked.is_empty() {
            debug!(
                "User {} unlocked {} achievement(s)",
                user_id,
                newly_unlocked.len()
            );
            self.event_sink.emit(DomainEvent::achievements_unlocked(
                user_id.to_string(),
                newly_unlocked.iter().map(|rule| rule.id.clone()).collect(),
            ));
        }

        Ok(newly_unlocked)
    }

    async fn award_first_step(&self, user_id: &str) -> Result<bool> {
        if self.unlocked_or_empty(user_id).contains(FIRST_STEP_RULE_ID) {
            return Ok(false);
        }
        match self
            .achievement_repository
            .add_unlocked_id(user_id, FIRST_STEP_RULE_ID)
            .await
        {
            Ok(()) => {
                self.event_sink.emit(DomainEvent::achievements_unlocked(
                    user_id.to_string(),
                    vec![FIRST_STEP_RULE_ID.to_string()],
                ));
                Ok(true)
            }
            Err(e) => {
                error!(
                    "Failed to persist first-step unlock for user {}: {}",
                    user_id, e
                );
                Ok(false)
            }
        }
    }

    fn get_unlocked(&self, user_id: &str) -> Result<HashSet<String>> {
        Ok(self.unlocked_or_empty(user_id))
    }

    async fn remove_achievement(&self, user_id: &str, rule_id: &str) -> Result<()> {
        self.achievement_repository
            .remove_unlocked_id(user_id, rule_id)
            .await
    }

    fn achievement_summary(&self, user_id: &str) -> Result<AchievementSummary> {
        let unlocked = self.unlocked_or_empty(user_id);
        // Stale ids from retired rules don't count towards completion.
        let unlocked_count = unlocked
            .iter()
            .filter(|id| rule_by_id(id).is_some())
            .count();
        let total_count = all_rules().len();
        let completion = if total_count == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(unlocked_count) / Decimal::from(total_count) * Decimal::ONE_HUNDRED)
                .round_dp(COMPLETION_DECIMAL_PRECISION)
        };

        Ok(AchievementSummary {
            unlocked_count,
            total_count,
            completion,
        })
    }
}
