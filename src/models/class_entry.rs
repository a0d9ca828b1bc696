use crate::errors::{AppError, AppResult};
use crate::utils::time::{self, hhmm};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Day of the week, persisted by its full English name ("Monday").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn from_weekday(w: Weekday) -> Self {
        match w {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }

    pub fn of(date: &NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    /// Accepts full names and three-letter abbreviations, any case.
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == lower || d.name()[..3].to_lowercase() == lower)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: Day,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl ScheduleSlot {
    pub fn new(day: Day, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            day,
            start_time,
            end_time,
        }
    }

    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            time::format_time(&self.start_time),
            time::format_time(&self.end_time)
        )
    }
}

impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time_range())
    }
}

/// Parses the CLI form "Monday 09:00-10:30".
impl FromStr for ScheduleSlot {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (day_raw, range) = s.trim().split_once(char::is_whitespace).ok_or_else(|| {
            AppError::InvalidInput(format!("schedule slot '{s}' (expected 'Monday 09:00-10:30')"))
        })?;

        let day = Day::from_name(day_raw)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown day '{day_raw}'")))?;

        let (start_raw, end_raw) = range.trim().split_once('-').ok_or_else(|| {
            AppError::InvalidInput(format!("time range '{range}' (expected HH:MM-HH:MM)"))
        })?;

        let start_time =
            time::parse_time(start_raw).ok_or_else(|| AppError::InvalidTime(start_raw.into()))?;
        let end_time =
            time::parse_time(end_raw).ok_or_else(|| AppError::InvalidTime(end_raw.into()))?;

        Ok(ScheduleSlot::new(day, start_time, end_time))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub room: String,
    #[serde(default, deserialize_with = "readable_slots")]
    pub schedule: Vec<ScheduleSlot>,
}

/// Slots with a blank or malformed day or time are dropped; the class stays.
fn readable_slots<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<ScheduleSlot>, D::Error> {
    let raw = Option::<Vec<serde_json::Value>>::deserialize(d)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<ScheduleSlot>(v) {
            Ok(slot) => Some(slot),
            Err(e) => {
                warn!(error = %e, "dropping unreadable schedule slot");
                None
            }
        })
        .collect())
}

impl ClassEntry {
    /// First slot of the schedule falling on `day`, if any.
    pub fn slot_on(&self, day: Day) -> Option<&ScheduleSlot> {
        self.schedule.iter().find(|s| s.day == day)
    }

    pub fn schedule_summary(&self) -> String {
        self.schedule
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Input for `add_class`; the id is assigned by the container.
#[derive(Debug, Clone, Default)]
pub struct NewClass {
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub schedule: Vec<ScheduleSlot>,
}

impl NewClass {
    pub fn into_entry(self, id: String) -> ClassEntry {
        ClassEntry {
            id,
            name: self.name,
            teacher: self.teacher,
            room: self.room,
            schedule: self.schedule,
        }
    }
}

/// Partial update: only `Some` fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct ClassPatch {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub schedule: Option<Vec<ScheduleSlot>>,
}

impl ClassPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.teacher.is_none() && self.room.is_none() && self.schedule.is_none()
    }

    pub fn apply(self, entry: &mut ClassEntry) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(teacher) = self.teacher {
            entry.teacher = teacher;
        }
        if let Some(room) = self.room {
            entry.room = room;
        }
        if let Some(schedule) = self.schedule {
            entry.schedule = schedule;
        }
    }
}
