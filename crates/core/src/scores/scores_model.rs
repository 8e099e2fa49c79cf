//! Carbon score history models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::footprint::{EmissionBreakdown, SurveyInput};

/// A single persisted carbon score.
///
/// History is append-only: the engine never mutates or deletes records, so a
/// record can be treated as an immutable fact once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: String,
    pub user_id: String,
    #[serde(with = "lenient_timestamp_format")]
    pub created_at: DateTime<Utc>,
    /// Weekly estimate, rounded to 2 decimal places at submission time.
    pub weekly_kg_co2e: Decimal,
    /// Absent on records imported from older exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<EmissionBreakdown>,
    /// Absent on records imported from older exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<SurveyInput>,
}

/// Input model for appending a new score record. The store assigns the id
/// and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScoreRecord {
    pub user_id: String,
    pub weekly_kg_co2e: Decimal,
    pub breakdown: EmissionBreakdown,
    pub survey: SurveyInput,
}

/// Serde adapter for `created_at`. Serializes as RFC 3339; deserializes any
/// of the timestamp shapes older clients wrote (epoch millis, RFC 3339,
/// date-only strings, `{"seconds": n}` objects). Unrecognizable values fall
/// back to now rather than rejecting the whole record.
mod lenient_timestamp_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use crate::utils::time_utils::normalize_timestamp;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(normalize_timestamp(&value).unwrap_or_else(|| {
            log::warn!("Unrecognized timestamp {:?}, falling back to now", value);
            Utc::now()
        }))
    }
}
