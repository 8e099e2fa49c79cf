//! Rule progress evaluation over score history.
//!
//! Pure functions: history, rule, and unlocked-set in; progress out. The
//! history slice must be ordered newest first, as the repositories return it.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::scores::ScoreRecord;
use crate::utils::time_utils::{tracking_date_from_utc, DEFAULT_TRACKING_TZ};

use super::achievements_model::{AchievementProgress, AchievementRule, RuleKind};

/// Evaluates a single rule against the score history.
///
/// `is_unlocked` comes from the persisted unlocked set, never from the
/// current metric: once a rule is unlocked it stays unlocked even if the
/// history stops satisfying it.
pub fn evaluate_rule(
    rule: &AchievementRule,
    records: &[ScoreRecord],
    unlocked: &HashSet<String>,
) -> AchievementProgress {
    let current = match rule.kind {
        RuleKind::CarbonScore => scores_within_threshold(records, rule.threshold),
        RuleKind::Streak => longest_streak(records),
        RuleKind::Milestone => Decimal::from(records.len()),
        RuleKind::Special => threshold_reached(records, rule.threshold),
        RuleKind::Improvement => improvement_percent(records),
    };

    AchievementProgress {
        rule: rule.clone(),
        is_unlocked: unlocked.contains(&rule.id),
        current,
        progress_pct: progress_percent(current, rule.target),
    }
}

fn progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (current / target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
}

/// Count of scores at or below the threshold.
fn scores_within_threshold(records: &[ScoreRecord], threshold: Option<Decimal>) -> Decimal {
    match threshold {
        Some(cutoff) => Decimal::from(
            records
                .iter()
                .filter(|r| r.weekly_kg_co2e <= cutoff)
                .count(),
        ),
        None => Decimal::ZERO,
    }
}

/// One if any score is at or below the threshold, zero otherwise.
fn threshold_reached(records: &[ScoreRecord], threshold: Option<Decimal>) -> Decimal {
    match threshold {
        Some(cutoff) if records.iter().any(|r| r.weekly_kg_co2e <= cutoff) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

/// Longest run of consecutive tracking days anywhere in the history.
///
/// Records map to calendar days in the tracking timezone; several records on
/// one day collapse into a single day, and a run extends only across an
/// exactly-one-day gap.
fn longest_streak(records: &[ScoreRecord]) -> Decimal {
    let mut dates: Vec<NaiveDate> = records
        .iter()
        .map(|r| tracking_date_from_utc(r.created_at, DEFAULT_TRACKING_TZ))
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let mut longest: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        run = match previous {
            Some(prev) if prev.signed_duration_since(date).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    Decimal::from(longest)
}

/// Reduction from the earliest score to the newest, as a percentage of the
/// earliest. Regressions clamp to zero; fewer than two records score zero.
fn improvement_percent(records: &[ScoreRecord]) -> Decimal {
    if records.len() < 2 {
        return Decimal::ZERO;
    }
    let latest = records[0].weekly_kg_co2e;
    let first = records[records.len() - 1].weekly_kg_co2e;
    if first <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    ((first - latest) / first * Decimal::ONE_HUNDRED).max(Decimal::ZERO)
}
