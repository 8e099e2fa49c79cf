//! Achievement domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Evaluation strategy for an achievement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Count of scores at or below the rule threshold.
    CarbonScore,
    /// Longest run of consecutive tracking days in the history.
    Streak,
    /// Total number of recorded scores.
    Milestone,
    /// Binary: at least one score at or below the rule threshold.
    Special,
    /// Percentage reduction from the earliest score to the latest.
    Improvement,
}

/// Display grouping for achievement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Carbon,
    Consistency,
    Milestone,
    Special,
}

/// A single achievement definition from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRule {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Emoji rendered next to the title.
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// The `current` value at which the rule is 100% complete.
    pub target: Decimal,
    /// Score cutoff (kg CO2e/week) for threshold-based kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Decimal>,
    pub category: RuleCategory,
}

/// Computed progress for one rule. Never persisted; recomputed from score
/// history on every evaluation. Only the unlocked flag is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementProgress {
    #[serde(flatten)]
    pub rule: AchievementRule,
    /// Sticky: stays true even if the history later stops satisfying the rule.
    pub is_unlocked: bool,
    /// Raw metric value (count, streak days, percent) for the rule's kind.
    pub current: Decimal,
    /// Percentage in [0, 100].
    pub progress_pct: Decimal,
}

/// Aggregate achievement stats for the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSummary {
    pub unlocked_count: usize,
    pub total_count: usize,
    /// Percentage in [0, 100], rounded to a whole percent.
    pub completion: Decimal,
}
