//! Profile module - per-user profile document saved with merge semantics.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::{ProfileUpdate, UserProfile};
pub use profile_service::{ProfileService, ProfileServiceTrait};
pub use profile_traits::ProfileRepositoryTrait;
