use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use ecotrack_core::errors::Result;
use ecotrack_core::profile::{ProfileRepositoryTrait, UserProfile};

use crate::locks::{read_guard, write_guard};

const STORE: &str = "profile";

/// One profile document per user, replaced wholesale on save. The merge
/// itself happens in the profile service before the document gets here.
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        InMemoryProfileRepository {
            profiles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepositoryTrait for InMemoryProfileRepository {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let profiles = read_guard(&self.profiles, STORE)?;
        Ok(profiles.get(user_id).cloned())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = write_guard(&self.profiles, STORE)?;
        profiles.insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_save_and_get_roundtrip() {
        let repo = InMemoryProfileRepository::new();

        let mut profile = UserProfile::new("user-1");
        profile.name = Some("Alice".to_string());
        profile
            .extras
            .insert("birthdate".to_string(), json!("1999-01-01"));
        repo.save_profile(&profile).await.unwrap();

        let stored = repo.get_profile("user-1").unwrap().unwrap();
        assert_eq!(stored, profile);
    }

    #[tokio::test]
    async fn test_save_replaces_document() {
        let repo = InMemoryProfileRepository::new();

        let mut profile = UserProfile::new("user-1");
        profile.name = Some("Alice".to_string());
        repo.save_profile(&profile).await.unwrap();

        profile.name = Some("Alys".to_string());
        repo.save_profile(&profile).await.unwrap();

        let stored = repo.get_profile("user-1").unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Alys"));
    }

    #[test]
    fn test_get_profile_returns_none_when_absent() {
        let repo = InMemoryProfileRepository::new();
        assert!(repo.get_profile("nobody").unwrap().is_none());
    }
}
