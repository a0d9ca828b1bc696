//! GPA sub-model: semesters of courses, each course weighted by its units.

use super::new_id;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade and its point value on the 5-point scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    pub fn points(&self) -> f64 {
        match self {
            Grade::A => 5.0,
            Grade::B => 4.0,
            Grade::C => 3.0,
            Grade::D => 2.0,
            Grade::E => 1.0,
            Grade::F => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let upper = s.trim().to_uppercase();
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == upper)
            .ok_or_else(|| AppError::InvalidGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a units field. Blank, non-numeric, negative or non-finite input is
/// "absent", which is not the same thing as zero units.
pub fn parse_units(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|u| u.is_finite() && *u >= 0.0)
}

/// Units travel as strings ("3", "") on disk; plain numbers are read too.
mod units_format {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(units: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match units {
            Some(u) => s.serialize_str(&u.to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let raw = Value::deserialize(d)?;
        Ok(match raw {
            Value::String(s) => super::parse_units(&s),
            Value::Number(n) => n.as_f64().filter(|u| u.is_finite() && *u >= 0.0),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "units_format")]
    pub units: Option<f64>,
    #[serde(default)]
    pub grade: Grade,
}

impl Course {
    /// An empty row, as offered by the "add course" action.
    pub fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            units: None,
            grade: Grade::A,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// New semester holding a single blank course.
    pub fn with_blank_course(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            courses: vec![Course::blank()],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    /// `Some(None)` blanks the units field.
    pub units: Option<Option<f64>>,
    pub grade: Option<Grade>,
}

impl CoursePatch {
    pub fn apply(self, c: &mut Course) {
        if let Some(name) = self.name {
            c.name = name;
        }
        if let Some(units) = self.units {
            c.units = units;
        }
        if let Some(grade) = self.grade {
            c.grade = grade;
        }
    }
}
