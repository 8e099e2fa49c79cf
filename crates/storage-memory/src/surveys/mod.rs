//! In-memory storage implementation for survey snapshots.

mod repository;

pub use repository::InMemorySurveyRepository;

// Re-export trait from core for convenience
pub use ecotrack_core::footprint::SurveyRepositoryTrait;
