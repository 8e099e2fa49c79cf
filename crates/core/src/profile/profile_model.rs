use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// Stored profile document for one user.
///
/// Clients keep free-form keys (birthdate, avatar, units preference) next to
/// the named fields, so unknown keys are preserved rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extras: HashMap<String, Value>,
}

impl UserProfile {
    pub fn new(user_id: &str) -> Self {
        UserProfile {
            user_id: user_id.to_string(),
            name: None,
            email: None,
            updated_at: Utc::now(),
            extras: HashMap::new(),
        }
    }

    /// Applies a partial update. Unset fields keep their stored values;
    /// extras merge key by key, provided keys overwriting stored ones.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        self.extras.extend(update.extras);
    }
}

/// Partial profile update. Only the fields present overwrite stored values.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extras: HashMap<String, Value>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::InvalidInput(
                    "name must not be blank".to_string(),
                ));
            }
        }
        if let Some(email) = &self.email {
            if email.trim().is_empty() || !email.contains('@') {
                return Err(ValidationError::InvalidInput(format!(
                    "invalid email address: {}",
                    email
                )));
            }
        }
        Ok(())
    }
}
