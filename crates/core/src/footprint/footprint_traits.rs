use crate::errors::Result;
use crate::footprint::footprint_model::{FootprintResult, SubmissionOutcome, SurveyInput};
use async_trait::async_trait;

/// Trait for survey snapshot repository operations
#[async_trait]
pub trait SurveyRepositoryTrait: Send + Sync {
    fn get_survey(&self, user_id: &str) -> Result<Option<SurveyInput>>;
    /// Overwrites the stored snapshot; only the latest survey is kept.
    async fn save_survey(&self, user_id: &str, survey: &SurveyInput) -> Result<()>;
}

/// Trait for footprint service operations
#[async_trait]
pub trait FootprintServiceTrait: Send + Sync {
    /// Validates and calculates without persisting anything.
    fn calculate(&self, input: &SurveyInput) -> Result<FootprintResult>;
    /// Validates, calculates, appends the score to history, and runs the
    /// achievement pass. The returned outcome carries everything the caller
    /// needs to render the result screen in one round trip.
    async fn submit_survey(&self, user_id: &str, input: SurveyInput) -> Result<SubmissionOutcome>;
    fn get_survey(&self, user_id: &str) -> Result<Option<SurveyInput>>;
}
