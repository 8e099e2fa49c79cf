//! In-memory storage implementation for user profiles.

mod repository;

pub use repository::InMemoryProfileRepository;

// Re-export trait from core for convenience
pub use ecotrack_core::profile::ProfileRepositoryTrait;
