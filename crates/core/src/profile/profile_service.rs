use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::errors::Result;

use super::profile_model::{ProfileUpdate, UserProfile};
use super::profile_traits::ProfileRepositoryTrait;

// Define the trait for ProfileService
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Merge the update into the stored profile, creating it if absent.
    /// Returns the profile as persisted.
    async fn save_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<UserProfile>;
}

pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
}

// Implement the trait for ProfileService
#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.profile_repository.get_profile(user_id)
    }

    async fn save_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<UserProfile> {
        update.validate()?;

        let mut profile = self
            .profile_repository
            .get_profile(user_id)?
            .unwrap_or_else(|| UserProfile::new(user_id));
        profile.merge(update);
        profile.updated_at = Utc::now();

        self.profile_repository.save_profile(&profile).await?;
        debug!("Saved profile for user {}", user_id);
        Ok(profile)
    }
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        ProfileService { profile_repository }
    }
}
