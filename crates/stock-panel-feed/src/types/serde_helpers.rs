/*
[INPUT]:  Raw timestamp strings from the feed
[OUTPUT]: Parsed chrono timestamps
[POS]:    Data layer - custom serde helpers for wire formats
[UPDATE]: When the feed changes its timestamp encoding
*/

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserializes a bar timestamp into `DateTime<Utc>`.
///
/// The upstream aggregator emits naive `YYYY-MM-DD HH:MM:SS` strings
/// (stringified pandas index); RFC 3339 is accepted as well.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(serde::de::Error::custom(format!(
        "invalid timestamp: {raw}"
    )))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::deserialize_timestamp")]
        timestamp: chrono::DateTime<chrono::Utc>,
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"timestamp": "2024-01-01T09:30:00Z"}"#).unwrap();
        assert_eq!(wrapper.timestamp.hour(), 9);
        assert_eq!(wrapper.timestamp.minute(), 30);
    }

    #[test]
    fn test_naive_pandas_timestamp() {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"timestamp": "2024-01-01 16:05:00"}"#).unwrap();
        assert_eq!(wrapper.timestamp.year(), 2024);
        assert_eq!(wrapper.timestamp.hour(), 16);
        assert_eq!(wrapper.timestamp.minute(), 5);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let result = serde_json::from_str::<Wrapper>(r#"{"timestamp": "yesterday"}"#);
        assert!(result.is_err());
    }
}
