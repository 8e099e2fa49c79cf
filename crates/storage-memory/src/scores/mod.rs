//! In-memory storage implementation for score records.

mod repository;

pub use repository::InMemoryScoreRepository;

// Re-export trait from core for convenience
pub use ecotrack_core::scores::ScoreRepositoryTrait;
