//! EcoTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for EcoTrack.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-memory` crate.

pub mod achievements;
pub mod constants;
pub mod errors;
pub mod events;
pub mod footprint;
pub mod profile;
pub mod scores;
pub mod suggestions;
pub mod utils;

// Re-export common types from the footprint and achievements modules
pub use achievements::*;
pub use footprint::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
