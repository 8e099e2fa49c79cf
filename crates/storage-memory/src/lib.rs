//! In-memory storage implementation for EcoTrack.
//!
//! This crate implements the repository traits defined in `ecotrack-core`
//! with process-memory collections behind `RwLock`s. It backs tests, demos,
//! and single-process deployments that do not need durability.
//!
//! # Architecture
//!
//! Only this crate knows how records are held; everything above it works
//! with the core traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-memory (this crate)
//!       │
//!       ▼
//!  process memory
//! ```

mod locks;

// Repository implementations
pub mod achievements;
pub mod profiles;
pub mod scores;
pub mod surveys;

pub use achievements::InMemoryAchievementRepository;
pub use profiles::InMemoryProfileRepository;
pub use scores::InMemoryScoreRepository;
pub use surveys::InMemorySurveyRepository;

// Re-export from ecotrack-core for convenience
pub use ecotrack_core::errors::{DatabaseError, Error, Result};
