//! Score history module - append-only carbon score records.

mod scores_model;
mod scores_service;
mod scores_traits;

pub use scores_model::{NewScoreRecord, ScoreRecord};
pub use scores_service::ScoreService;
pub use scores_traits::{ScoreRepositoryTrait, ScoreServiceTrait};
