//! Time utilities: parsing HH:MM, serde helpers for "HH:MM" fields.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Serialize a `NaiveTime` as a zero-padded "HH:MM" string.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw)
            .or_else(|| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S").ok())
            .ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }
}
