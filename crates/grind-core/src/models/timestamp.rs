//! Lenient decoding of timestamps in plan files.
//!
//! Files are always written as RFC 3339 in UTC. Older files may carry naive
//! ISO-8601 date-times without an offset; those are read as wall-clock time in
//! the system time zone, the same zone completions are bucketed in.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use serde::{de::Error as _, Deserialize, Deserializer};

/// Parses `value` as a timestamp, resolving offset-less values in `tz`.
pub(crate) fn parse_in(value: &str, tz: &TimeZone) -> Result<Timestamp, jiff::Error> {
    match value.parse::<Timestamp>() {
        Ok(timestamp) => Ok(timestamp),
        Err(err) => value
            .parse::<DateTime>()
            .and_then(|naive| naive.to_zoned(tz.clone()))
            .map(|zoned| zoned.timestamp())
            .map_err(|_| err),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_in(&value, &TimeZone::system()).map_err(D::Error::custom)
}

pub(crate) mod option {
    use super::*;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| parse_in(&value, &TimeZone::system()).map_err(D::Error::custom))
            .transpose()
    }
}
