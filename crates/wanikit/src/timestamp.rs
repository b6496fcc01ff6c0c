//! Fixed wire format for timestamps.
//!
//! WaniKani encodes every date as ISO-8601 with fractional seconds in UTC
//! (for example `2023-01-17T21:07:53.000Z`). This module is the single
//! formatter for the whole crate: request bodies, query parameters, and
//! response models all go through it via `#[serde(with = "timestamp")]` or
//! [`to_string`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Render a timestamp in the fixed wire format.
pub fn to_string(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a timestamp from the wire, normalizing any offset to UTC.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|parsed| parsed.with_timezone(&Utc))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_string(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

/// Same format for `Option<DateTime<Utc>>` fields. Combine with
/// `#[serde(default)]` so a missing key decodes as `None`.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.as_deref().map(parse).transpose().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_with_subsecond_precision() {
        let original = Utc.with_ymd_and_hms(2023, 1, 17, 21, 7, 53).unwrap()
            + chrono::Duration::milliseconds(420);

        let encoded = to_string(&original);
        assert_eq!(encoded, "2023-01-17T21:07:53.420Z");
        assert_eq!(parse(&encoded).unwrap(), original);
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = parse("2023-01-17T22:07:53.000+01:00").unwrap();
        assert_eq!(to_string(&parsed), "2023-01-17T21:07:53.000Z");
    }

    #[test]
    fn rejects_non_iso_input() {
        assert!(parse("January 17, 2023").is_err());
    }
}
