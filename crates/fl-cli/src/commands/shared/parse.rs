use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a `SCREAMING_SNAKE_CASE` enum value using serde-deserialization.
///
/// Accepts any case and `-` in place of `_`, so `needs-follow-up` and
/// `NEEDS_FOLLOW_UP` both work.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_datetime(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|at| at.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected RFC 3339): {error}"))
}
