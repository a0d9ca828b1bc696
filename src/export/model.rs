//! Flat row shapes for CSV export.

use crate::core::derive::class_name;
use crate::models::{Assignment, ClassEntry, Exam};
use crate::utils::time::format_time;
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct ClassRow {
    pub id: String,
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub schedule: String,
}

impl From<&ClassEntry> for ClassRow {
    fn from(c: &ClassEntry) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            teacher: c.teacher.clone(),
            room: c.room.clone(),
            schedule: c.schedule_summary(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct AssignmentRow {
    pub id: String,
    pub title: String,
    pub class: String,
    pub due_date: String,
    pub priority: String,
    pub status: String,
    pub description: String,
}

impl AssignmentRow {
    pub fn new(a: &Assignment, classes: &[ClassEntry]) -> Self {
        Self {
            id: a.id.clone(),
            title: a.title.clone(),
            class: class_name(classes, a.class_id.as_deref()).to_string(),
            due_date: a.due_date.format("%Y-%m-%d").to_string(),
            priority: a.priority.to_string(),
            status: a.status.to_string(),
            description: a.description.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ExamRow {
    pub id: String,
    pub title: String,
    pub class: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub topics: String,
}

impl ExamRow {
    pub fn new(e: &Exam, classes: &[ClassEntry]) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            class: class_name(classes, e.class_id.as_deref()).to_string(),
            date: e.date.format("%Y-%m-%d").to_string(),
            time: format_time(&e.time),
            kind: e.kind.to_string(),
            topics: e.topics.clone(),
        }
    }
}
