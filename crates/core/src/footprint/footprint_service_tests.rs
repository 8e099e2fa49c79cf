use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::achievements::{AchievementRepositoryTrait, AchievementService};
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, MockDomainEventSink};
use crate::footprint::{FootprintService, FootprintServiceTrait, SurveyInput, SurveyRepositoryTrait};
use crate::scores::{NewScoreRecord, ScoreRecord, ScoreRepositoryTrait};

// ============== Mock Repositories ==============

struct MockScoreRepository {
    records: RwLock<Vec<ScoreRecord>>,
    next_id: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockScoreRepository {
    fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            fail_writes: AtomicBool::new(false),
        }
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[async_trait]
impl ScoreRepositoryTrait for MockScoreRepository {
    fn fetch_recent(&self, user_id: &str, limit: usize) -> Result<Vec<ScoreRecord>> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch_latest(&self, user_id: &str) -> Result<Option<ScoreRecord>> {
        Ok(self.fetch_recent(user_id, 1)?.into_iter().next())
    }

    async fn append(&self, new_record: NewScoreRecord) -> Result<ScoreRecord> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DatabaseError::WriteFailed("score store offline".to_string()).into());
        }
        let record = ScoreRecord {
            id: format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
            user_id: new_record.user_id.clone(),
            created_at: Utc::now(),
            weekly_kg_co2e: new_record.weekly_kg_co2e,
            breakdown: Some(new_record.breakdown),
            survey: Some(new_record.survey),
        };
        // Newest first, like the real stores.
        self.records.write().unwrap().insert(0, record.clone());
        Ok(record)
    }
}

struct MockSurveyRepository {
    snapshot: RwLock<Option<SurveyInput>>,
    fail_saves: AtomicBool,
}

impl MockSurveyRepository {
    fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
            fail_saves: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SurveyRepositoryTrait for MockSurveyRepository {
    fn get_survey(&self, _user_id: &str) -> Result<Option<SurveyInput>> {
        Ok(self.snapshot.read().unwrap().clone())
    }

    async fn save_survey(&self, _user_id: &str, survey: &SurveyInput) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DatabaseError::WriteFailed("survey store offline".to_string()).into());
        }
        *self.snapshot.write().unwrap() = Some(survey.clone());
        Ok(())
    }
}

struct MockAchievementRepository {
    unlocked: RwLock<HashSet<String>>,
}

#[async_trait]
impl AchievementRepositoryTrait for MockAchievementRepository {
    fn get_unlocked_ids(&self, _user_id: &str) -> Result<HashSet<String>> {
        Ok(self.unlocked.read().unwrap().clone())
    }

    async fn add_unlocked_id(&self, _user_id: &str, rule_id: &str) -> Result<()> {
        self.unlocked.write().unwrap().insert(rule_id.to_string());
        Ok(())
    }

    async fn remove_unlocked_id(&self, _user_id: &str, rule_id: &str) -> Result<()> {
        self.unlocked.write().unwrap().remove(rule_id);
        Ok(())
    }
}

// ============== Helper Functions ==============

const USER: &str = "user-1";

fn make_service() -> (
    FootprintService,
    Arc<MockScoreRepository>,
    Arc<MockSurveyRepository>,
    MockDomainEventSink,
) {
    let score_repo = Arc::new(MockScoreRepository::new());
    let survey_repo = Arc::new(MockSurveyRepository::new());
    let achievement_repo = Arc::new(MockAchievementRepository {
        unlocked: RwLock::new(HashSet::new()),
    });
    let sink = MockDomainEventSink::new();
    let achievement_service = Arc::new(AchievementService::new(
        score_repo.clone(),
        achievement_repo,
        Arc::new(sink.clone()),
    ));
    let service = FootprintService::new(
        score_repo.clone(),
        survey_repo.clone(),
        achievement_service,
        Arc::new(sink.clone()),
    );
    (service, score_repo, survey_repo, sink)
}

fn typical_survey() -> SurveyInput {
    SurveyInput {
        electricity_bill_aud: dec!(120),
        gas_bill_aud: dec!(80),
        has_car: true,
        car_weekly_km: Some(dec!(50)),
        car_fuel_type: Some("petrol".to_string()),
        uses_public_transport: false,
        public_transport_weekly_km: None,
        takes_flights: false,
        flights_per_year: None,
        flight_type: None,
        red_meat_meals_per_week: dec!(3),
        poultry_fish_meals_per_week: dec!(2),
        dairy_portions_per_week: dec!(7),
        clothes_per_year: None,
        recycles: None,
        composts: None,
        household_size: 2,
    }
}

/// A survey whose footprint floors at zero: no consumption, one waste credit.
fn minimal_survey() -> SurveyInput {
    SurveyInput {
        electricity_bill_aud: Decimal::ZERO,
        gas_bill_aud: Decimal::ZERO,
        has_car: false,
        car_weekly_km: None,
        car_fuel_type: None,
        uses_public_transport: false,
        public_transport_weekly_km: None,
        takes_flights: false,
        flights_per_year: None,
        flight_type: None,
        red_meat_meals_per_week: Decimal::ZERO,
        poultry_fish_meals_per_week: Decimal::ZERO,
        dairy_portions_per_week: Decimal::ZERO,
        clothes_per_year: None,
        recycles: Some(true),
        composts: None,
        household_size: 1,
    }
}

// ============== Tests ==============

#[tokio::test]
async fn test_submit_survey_end_to_end() {
    let (service, score_repo, _, sink) = make_service();

    let outcome = service.submit_survey(USER, minimal_survey()).await.unwrap();

    assert_eq!(outcome.record.weekly_kg_co2e, Decimal::ZERO);
    assert_eq!(outcome.record.user_id, USER);
    assert_eq!(score_repo.len(), 1);

    // First submission unlocks first_step plus both zero-score specials.
    let ids: Vec<&str> = outcome.newly_unlocked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["first_step", "perfect_score", "low_carbon_hero"]);

    // Score event first, then one event per award step.
    let events = sink.events();
    assert_eq!(events.len(), 3);
    match &events[0] {
        DomainEvent::ScoreRecorded {
            user_id,
            record_id,
            weekly_kg_co2e,
        } => {
            assert_eq!(user_id, USER);
            assert_eq!(record_id, &outcome.record.id);
            assert_eq!(*weekly_kg_co2e, Decimal::ZERO);
        }
        _ => panic!("Expected ScoreRecorded first"),
    }
    match &events[1] {
        DomainEvent::AchievementsUnlocked { rule_ids, .. } => {
            assert_eq!(rule_ids, &vec!["first_step".to_string()]);
        }
        _ => panic!("Expected AchievementsUnlocked second"),
    }
    match &events[2] {
        DomainEvent::AchievementsUnlocked { rule_ids, .. } => {
            assert_eq!(
                rule_ids,
                &vec!["perfect_score".to_string(), "low_carbon_hero".to_string()]
            );
        }
        _ => panic!("Expected AchievementsUnlocked third"),
    }

    // Snapshot saved for pre-filling the next survey.
    let snapshot = service.get_survey(USER).unwrap().unwrap();
    assert_eq!(snapshot.recycles, Some(true));
}

#[tokio::test]
async fn test_second_submission_only_awards_new_rules() {
    let (service, score_repo, _, _) = make_service();

    service.submit_survey(USER, minimal_survey()).await.unwrap();
    let outcome = service.submit_survey(USER, minimal_survey()).await.unwrap();

    assert_eq!(score_repo.len(), 2);
    let ids: Vec<&str> = outcome.newly_unlocked.iter().map(|r| r.id.as_str()).collect();
    // Two scores below 6.0 now exist; first_step and the specials stay
    // unlocked from the first pass.
    assert_eq!(ids, vec!["beginner_saver"]);
}

#[tokio::test]
async fn test_submission_score_is_rounded_to_two_decimals() {
    let (service, _, _, _) = make_service();

    let outcome = service.submit_survey(USER, typical_survey()).await.unwrap();

    assert_eq!(outcome.record.weekly_kg_co2e, dec!(155.15));
    assert_eq!(
        outcome.result.weekly_kg_co2e.round_dp(2),
        outcome.record.weekly_kg_co2e
    );
    // The full calculation rides along on the record.
    let breakdown = outcome.record.breakdown.as_ref().unwrap();
    assert_eq!(breakdown.car, dec!(21));
}

#[tokio::test]
async fn test_validation_failure_blocks_submission() {
    let (service, score_repo, _, sink) = make_service();

    let mut survey = typical_survey();
    survey.electricity_bill_aud = dec!(-1);

    let err = service.submit_survey(USER, survey).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(score_repo.len(), 0);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_append_failure_propagates() {
    let (service, score_repo, survey_repo, sink) = make_service();
    score_repo.fail_writes.store(true, Ordering::SeqCst);

    let result = service.submit_survey(USER, typical_survey()).await;
    assert!(result.is_err());
    assert!(sink.is_empty());
    assert!(survey_repo.snapshot.read().unwrap().is_none());
}

#[tokio::test]
async fn test_snapshot_save_failure_is_nonfatal() {
    let (service, _, survey_repo, _) = make_service();
    survey_repo.fail_saves.store(true, Ordering::SeqCst);

    let outcome = service.submit_survey(USER, minimal_survey()).await.unwrap();

    // The score and awards still land; only the pre-fill snapshot is lost.
    assert!(!outcome.newly_unlocked.is_empty());
    assert!(service.get_survey(USER).unwrap().is_none());
}

#[tokio::test]
async fn test_calculate_does_not_persist() {
    let (service, score_repo, _, sink) = make_service();

    let result = service.calculate(&typical_survey()).unwrap();
    assert_eq!(result.weekly_kg_co2e.round_dp(2), dec!(155.15));
    assert_eq!(score_repo.len(), 0);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_calculate_rejects_invalid_survey() {
    let (service, _, _, _) = make_service();

    let mut survey = typical_survey();
    survey.household_size = 0;
    assert!(service.calculate(&survey).is_err());
}
