//! Achievements module - rule catalog, evaluation, and award flow.

mod achievements_catalog;
mod achievements_evaluator;
mod achievements_model;
mod achievements_service;
mod achievements_traits;


pub use achievements_catalog::{all_rules, rule_by_id, rules_by_category, FIRST_STEP_RULE_ID};
pub use achievements_evaluator::evaluate_rule;
pub use achievements_model::{
    AchievementProgress, AchievementRule, AchievementSummary, RuleCategory, RuleKind,
};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
