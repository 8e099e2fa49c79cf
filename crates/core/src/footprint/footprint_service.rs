use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::achievements::{rule_by_id, AchievementServiceTrait, FIRST_STEP_RULE_ID};
use crate::constants::SCORE_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::scores::{NewScoreRecord, ScoreRepositoryTrait};

use super::footprint_calculator::calculate_footprint;
use super::footprint_model::{FootprintResult, SubmissionOutcome, SurveyInput};
use super::footprint_traits::{FootprintServiceTrait, SurveyRepositoryTrait};

/// Orchestrates the survey submission flow: validate, calculate, persist,
/// then let the achievement service react to the new record.
pub struct FootprintService {
    score_repository: Arc<dyn ScoreRepositoryTrait>,
    survey_repository: Arc<dyn SurveyRepositoryTrait>,
    achievement_service: Arc<dyn AchievementServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl FootprintService {
    pub fn new(
        score_repository: Arc<dyn ScoreRepositoryTrait>,
        survey_repository: Arc<dyn SurveyRepositoryTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        FootprintService {
            score_repository,
            survey_repository,
            achievement_service,
            event_sink,
        }
    }
}

#[async_trait]
impl FootprintServiceTrait for FootprintService {
    fn calculate(&self, input: &SurveyInput) -> Result<FootprintResult> {
        input.validate()?;
        Ok(calculate_footprint(input))
    }

    async fn submit_survey(&self, user_id: &str, input: SurveyInput) -> Result<SubmissionOutcome> {
        input.validate()?;
        let result = calculate_footprint(&input);

        // The append must succeed before anything else happens; a survey
        // whose score is lost would silently break streaks and milestones.
        let record = self
            .score_repository
            .append(NewScoreRecord {
                user_id: user_id.to_string(),
                weekly_kg_co2e: result.weekly_kg_co2e.round_dp(SCORE_DECIMAL_PRECISION),
                breakdown: result.breakdown.clone(),
                survey: input.clone(),
            })
            .await?;

        debug!(
            "Recorded carbon score {} kg CO2e/week for user {}",
            record.weekly_kg_co2e, user_id
        );

        self.event_sink.emit(DomainEvent::score_recorded(
            user_id.to_string(),
            record.id.clone(),
            record.weekly_kg_co2e,
        ));

        // Snapshot save is best-effort: the score is already recorded and a
        // lost snapshot only costs pre-filled form fields next time.
        if let Err(e) = self.survey_repository.save_survey(user_id, &input).await {
            warn!("Failed to save survey snapshot for user {}: {}", user_id, e);
        }

        let mut newly_unlocked = Vec::new();
        if self.achievement_service.award_first_step(user_id).await? {
            if let Some(rule) = rule_by_id(FIRST_STEP_RULE_ID) {
                newly_unlocked.push(rule.clone());
            }
        }
        newly_unlocked.extend(
            self.achievement_service
                .check_and_award_achievements(user_id)
                .await?,
        );

        Ok(SubmissionOutcome {
            result,
            record,
            newly_unlocked,
        })
    }

    fn get_survey(&self, user_id: &str) -> Result<Option<SurveyInput>> {
        self.survey_repository.get_survey(user_id)
    }
}
