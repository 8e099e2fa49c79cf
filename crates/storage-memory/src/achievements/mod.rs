//! In-memory storage implementation for unlocked achievements.

mod repository;

pub use repository::InMemoryAchievementRepository;

// Re-export trait from core for convenience
pub use ecotrack_core::achievements::AchievementRepositoryTrait;
