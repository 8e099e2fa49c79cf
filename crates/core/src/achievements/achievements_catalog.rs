//! Static achievement rule catalog.
//!
//! The catalog ships as data (`rules.json`) and is parsed once on first use.
//! Adding a rule of an existing kind means editing the data file; the
//! evaluator dispatches on `RuleKind` and needs no code change.

use std::sync::LazyLock;

use super::achievements_model::{AchievementRule, RuleCategory};

/// Rule id awarded immediately after the very first recorded score.
pub const FIRST_STEP_RULE_ID: &str = "first_step";

static CATALOG: LazyLock<Vec<AchievementRule>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("rules.json")).expect("rules.json must be valid")
});

/// All rules in catalog order.
pub fn all_rules() -> &'static [AchievementRule] {
    &CATALOG
}

/// Looks up a rule by id.
pub fn rule_by_id(id: &str) -> Option<&'static AchievementRule> {
    CATALOG.iter().find(|rule| rule.id == id)
}

/// Rules belonging to the given display category, in catalog order.
pub fn rules_by_category(category: RuleCategory) -> Vec<&'static AchievementRule> {
    CATALOG
        .iter()
        .filter(|rule| rule.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::achievements_model::RuleKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_loads_all_rules() {
        assert_eq!(all_rules().len(), 16);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = all_rules().iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_first_step_is_a_milestone_with_target_one() {
        let rule = rule_by_id(FIRST_STEP_RULE_ID).unwrap();
        assert_eq!(rule.kind, RuleKind::Milestone);
        assert_eq!(rule.target, dec!(1));
    }

    #[test]
    fn test_unknown_id_returns_none() {
        assert!(rule_by_id("does_not_exist").is_none());
    }

    #[test]
    fn test_threshold_kinds_carry_thresholds() {
        for rule in all_rules() {
            match rule.kind {
                RuleKind::CarbonScore | RuleKind::Special => {
                    assert!(rule.threshold.is_some(), "rule {} needs a threshold", rule.id)
                }
                _ => assert!(rule.threshold.is_none(), "rule {} has a stray threshold", rule.id),
            }
        }
    }

    #[test]
    fn test_rules_by_category() {
        assert_eq!(rules_by_category(RuleCategory::Carbon).len(), 7);
        assert_eq!(rules_by_category(RuleCategory::Consistency).len(), 3);
        assert_eq!(rules_by_category(RuleCategory::Milestone).len(), 3);
        assert_eq!(rules_by_category(RuleCategory::Special).len(), 3);
    }

    #[test]
    fn test_targets_are_positive() {
        for rule in all_rules() {
            assert!(rule.target > dec!(0), "rule {} has a non-positive target", rule.id);
        }
    }
}
