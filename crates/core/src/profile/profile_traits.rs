//! Repository trait for user profiles.

use async_trait::async_trait;

use crate::errors::Result;

use super::profile_model::UserProfile;

/// Repository trait for the per-user profile document.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Get the stored profile, if any.
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Insert or replace the whole profile document.
    async fn save_profile(&self, profile: &UserProfile) -> Result<()>;
}
