use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;

/// Default timezone for tracking dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
/// The survey is AUD-denominated, so Australia/Sydney is a sensible default.
pub const DEFAULT_TRACKING_TZ: Tz = chrono_tz::Australia::Sydney;

/// Converts a UTC instant to a tracking date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Use this whenever you need to derive a "tracking day" from a timestamp,
/// e.g. when collapsing score records into daily streaks.
///
/// # Arguments
/// * `instant` - The UTC timestamp to convert
/// * `tz` - The timezone to use for the conversion
pub fn tracking_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default tracking timezone.
/// Equivalent to `tracking_date_from_utc(instant, DEFAULT_TRACKING_TZ)`.
pub fn tracking_date_today() -> NaiveDate {
    tracking_date_from_utc(Utc::now(), DEFAULT_TRACKING_TZ)
}

/// Best-effort conversion of a loosely typed timestamp value into a UTC
/// instant. Historical exports carry timestamps as epoch milliseconds,
/// RFC 3339 strings, date-only strings, or `{"seconds": n}` objects
/// depending on which client wrote them; all four shapes are accepted.
///
/// Returns `None` for anything unrecognizable.
pub fn normalize_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(s) => {
            if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
                return Some(instant.with_timezone(&Utc));
            }
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            let midnight = date.and_hms_opt(0, 0, 0)?;
            Some(Utc.from_utc_datetime(&midnight))
        }
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))?
                .as_i64()?;
            Utc.timestamp_opt(seconds, 0).single()
        }
        _ => None,
    }
}
