//! End-to-end tests wiring the core services to the in-memory stores.
//!
//! These drive the same path the apps do: survey in, score appended,
//! achievements awarded and persisted, snapshot saved, events emitted.

use std::sync::Arc;

use rust_decimal_macros::dec;
use serde_json::json;

use ecotrack_core::achievements::{AchievementService, AchievementServiceTrait};
use ecotrack_core::events::{DomainEvent, MockDomainEventSink};
use ecotrack_core::footprint::{FootprintService, FootprintServiceTrait, SurveyInput};
use ecotrack_core::profile::{ProfileService, ProfileServiceTrait, ProfileUpdate};
use ecotrack_core::scores::{ScoreService, ScoreServiceTrait};
use ecotrack_storage_memory::{
    InMemoryAchievementRepository, InMemoryProfileRepository, InMemoryScoreRepository,
    InMemorySurveyRepository,
};

const USER: &str = "user-1";

struct Engine {
    footprint: FootprintService,
    achievements: Arc<AchievementService>,
    scores: ScoreService,
    sink: MockDomainEventSink,
}

fn build_engine() -> Engine {
    let score_repo = Arc::new(InMemoryScoreRepository::new());
    let survey_repo = Arc::new(InMemorySurveyRepository::new());
    let achievement_repo = Arc::new(InMemoryAchievementRepository::new());
    let sink = MockDomainEventSink::new();

    let achievements = Arc::new(AchievementService::new(
        score_repo.clone(),
        achievement_repo,
        Arc::new(sink.clone()),
    ));
    let footprint = FootprintService::new(
        score_repo.clone(),
        survey_repo,
        achievements.clone(),
        Arc::new(sink.clone()),
    );
    let scores = ScoreService::new(score_repo);

    Engine {
        footprint,
        achievements,
        scores,
        sink,
    }
}

fn typical_survey() -> SurveyInput {
    serde_json::from_value(json!({
        "electricityBillAud": 120,
        "gasBillAud": 80,
        "hasCar": true,
        "carWeeklyKm": 50,
        "carFuelType": "petrol",
        "usesPublicTransport": false,
        "takesFlights": false,
        "redMeatMealsPerWeek": 3,
        "poultryFishMealsPerWeek": 2,
        "dairyPortionsPerWeek": 7,
        "householdSize": 2
    }))
    .unwrap()
}

fn zero_survey() -> SurveyInput {
    serde_json::from_value(json!({
        "electricityBillAud": 0,
        "gasBillAud": 0,
        "hasCar": false,
        "usesPublicTransport": false,
        "takesFlights": false,
        "redMeatMealsPerWeek": 0,
        "poultryFishMealsPerWeek": 0,
        "dairyPortionsPerWeek": 0,
        "recycles": true,
        "householdSize": 1
    }))
    .unwrap()
}

#[tokio::test]
async fn submission_flow_persists_score_and_awards() {
    let engine = build_engine();

    let outcome = engine
        .footprint
        .submit_survey(USER, typical_survey())
        .await
        .unwrap();

    assert_eq!(outcome.record.weekly_kg_co2e, dec!(155.15));
    let ids: Vec<&str> = outcome.newly_unlocked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["first_step"]);

    // The unlock survives an independent read through the store.
    let unlocked = engine.achievements.get_unlocked(USER).unwrap();
    assert!(unlocked.contains("first_step"));

    // History reads see the appended record.
    let history = engine.scores.get_score_history(USER, 100).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].weekly_kg_co2e, dec!(155.15));

    // Snapshot is ready to pre-fill the next survey.
    let snapshot = engine.footprint.get_survey(USER).unwrap().unwrap();
    assert_eq!(snapshot.car_fuel_type.as_deref(), Some("petrol"));

    let events = engine.sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], DomainEvent::ScoreRecorded { .. }));
    assert!(matches!(events[1], DomainEvent::AchievementsUnlocked { .. }));
}

#[tokio::test]
async fn repeat_submissions_accumulate_unlocks() {
    let engine = build_engine();

    let first = engine
        .footprint
        .submit_survey(USER, zero_survey())
        .await
        .unwrap();
    let second = engine
        .footprint
        .submit_survey(USER, zero_survey())
        .await
        .unwrap();
    let third = engine
        .footprint
        .submit_survey(USER, zero_survey())
        .await
        .unwrap();

    let ids = |outcome: &ecotrack_core::footprint::SubmissionOutcome| -> Vec<String> {
        outcome
            .newly_unlocked
            .iter()
            .map(|r| r.id.clone())
            .collect()
    };

    assert_eq!(ids(&first), ["first_step", "perfect_score", "low_carbon_hero"]);
    assert_eq!(ids(&second), ["beginner_saver"]);
    assert_eq!(ids(&third), ["green_pioneer", "moderate_achiever"]);

    let summary = engine.achievements.achievement_summary(USER).unwrap();
    assert_eq!(summary.unlocked_count, 6);
    assert_eq!(summary.total_count, 16);
    assert_eq!(summary.completion, dec!(38));

    let latest = engine.scores.get_latest_score(USER).unwrap().unwrap();
    assert_eq!(latest.weekly_kg_co2e, dec!(0.00));
}

#[tokio::test]
async fn profile_updates_merge_across_saves() {
    let repo = Arc::new(InMemoryProfileRepository::new());
    let service = ProfileService::new(repo);

    service
        .save_profile(
            USER,
            ProfileUpdate {
                name: Some("Alice".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    service
        .save_profile(
            USER,
            ProfileUpdate {
                extras: std::collections::HashMap::from([(
                    "birthdate".to_string(),
                    json!("1999-01-01"),
                )]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let profile = service.get_profile(USER).unwrap().unwrap();
    assert_eq!(profile.name.as_deref(), Some("Alice"));
    assert_eq!(profile.extras["birthdate"], json!("1999-01-01"));
}
