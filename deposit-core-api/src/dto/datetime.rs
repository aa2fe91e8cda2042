//! Lenient timestamp parsing for request payloads.
//!
//! Clients send dates as `2025-01-01`, `2025-01-01T00:00:00`, `2025-01-01 00:00:00`
//! or RFC 3339 with an offset. Offsets are converted to UTC and dropped, since
//! every timestamp in the store is timezone-less UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the accepted shapes.
pub fn parse_flexible_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `deserialize_with` helper for a required timestamp.
pub mod flexible_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_flexible_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date-time: {raw}")))
    }

    /// Optional variant; a missing, null or blank value is `None`.
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{de, Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => super::super::parse_flexible_datetime(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid date-time: {raw}"))),
            }
        }
    }
}
