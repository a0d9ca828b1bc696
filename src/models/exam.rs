use super::empty_as_none;
use crate::errors::{AppError, AppResult};
use crate::utils::time::hhmm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    Quiz,
    Midterm,
    #[default]
    Final,
    #[serde(rename = "Project Presentation")]
    ProjectPresentation,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Quiz => "Quiz",
            ExamType::Midterm => "Midterm",
            ExamType::Final => "Final",
            ExamType::ProjectPresentation => "Project Presentation",
        }
    }
}

impl FromStr for ExamType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "quiz" => Ok(ExamType::Quiz),
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "presentation" | "project presentation" => Ok(ExamType::ProjectPresentation),
            other => Err(AppError::InvalidInput(format!(
                "exam type '{other}' (expected quiz, midterm, final or presentation)"
            ))),
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exams are created and deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<String>,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(default)]
    pub topics: String,
    #[serde(rename = "type", default)]
    pub kind: ExamType,
}

#[derive(Debug, Clone)]
pub struct NewExam {
    pub title: String,
    pub class_id: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub topics: String,
    pub kind: ExamType,
}

impl NewExam {
    pub fn into_exam(self, id: String) -> Exam {
        Exam {
            id,
            title: self.title,
            class_id: self.class_id.filter(|c| !c.trim().is_empty()),
            date: self.date,
            time: self.time,
            topics: self.topics,
            kind: self.kind,
        }
    }
}
