//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (dashboard refresh,
/// celebration banners, push notifications, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A carbon score record was appended to a user's history.
    ScoreRecorded {
        user_id: String,
        record_id: String,
        weekly_kg_co2e: Decimal,
    },

    /// One or more achievements were newly unlocked. Emitted only after the
    /// unlock has been persisted.
    AchievementsUnlocked {
        user_id: String,
        rule_ids: Vec<String>,
    },
}

impl DomainEvent {
    /// Creates a ScoreRecorded event.
    pub fn score_recorded(user_id: String, record_id: String, weekly_kg_co2e: Decimal) -> Self {
        Self::ScoreRecorded {
            user_id,
            record_id,
            weekly_kg_co2e,
        }
    }

    /// Creates an AchievementsUnlocked event.
    pub fn achievements_unlocked(user_id: String, rule_ids: Vec<String>) -> Self {
        Self::AchievementsUnlocked { user_id, rule_ids }
    }
}
