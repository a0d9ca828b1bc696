pub mod assignment;
pub mod class_entry;
pub mod exam;
pub mod gpa;
pub mod profile;
pub mod theme;

pub use assignment::{Assignment, AssignmentPatch, NewAssignment, Priority, Status};
pub use class_entry::{ClassEntry, ClassPatch, Day, NewClass, ScheduleSlot};
pub use exam::{Exam, ExamType, NewExam};
pub use gpa::{Course, CoursePatch, Grade, Semester};
pub use profile::{ProfilePatch, UserProfile};
pub use theme::{AccentColor, ColorPreset, THEME_PRESETS, Theme};

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Fresh opaque id for a new entity.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn id_from_value(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Ids are opaque strings; older data holds numeric timestamps.
pub(crate) fn opaque_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let raw = Value::deserialize(d)?;
    id_from_value(raw.clone()).ok_or_else(|| D::Error::custom(format!("invalid id {raw}")))
}

/// `classId` references: both `null` and `""` mean "no class".
pub(crate) fn empty_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(d)?;
    Ok(raw
        .and_then(id_from_value)
        .filter(|s| !s.trim().is_empty()))
}
