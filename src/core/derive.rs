//! Read-only views computed from the container on every call.
//!
//! Nothing here is cached and nothing mutates state. Every function that
//! depends on the calendar takes `today` explicitly.

use crate::core::state::AppState;
use crate::models::{Assignment, ClassEntry, Day, Exam, ScheduleSlot, Status};
use crate::store::KeyValueStore;
use crate::utils::date;
use chrono::NaiveDate;

pub const UPCOMING_ASSIGNMENTS_LIMIT: usize = 5;
pub const UPCOMING_EXAMS_LIMIT: usize = 3;
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Label shown for a missing or dangling class reference.
pub const GENERAL_LABEL: &str = "General";

#[derive(Debug, Clone, Copy)]
pub struct TodayClass<'a> {
    pub class: &'a ClassEntry,
    pub slot: &'a ScheduleSlot,
}

/// Classes meeting on `today`'s weekday, earliest start first.
pub fn todays_schedule(classes: &[ClassEntry], today: NaiveDate) -> Vec<TodayClass<'_>> {
    let day = Day::of(&today);
    let mut out: Vec<TodayClass<'_>> = classes
        .iter()
        .filter_map(|class| class.slot_on(day).map(|slot| TodayClass { class, slot }))
        .collect();
    out.sort_by_key(|t| t.slot.start_time);
    out
}

/// Pending assignments due today or later, soonest first, at most five.
pub fn upcoming_assignments(assignments: &[Assignment], today: NaiveDate) -> Vec<&Assignment> {
    let mut out: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.status == Status::Pending && a.due_date >= today)
        .collect();
    out.sort_by_key(|a| a.due_date);
    out.truncate(UPCOMING_ASSIGNMENTS_LIMIT);
    out
}

/// Every exam, by date then time.
pub fn exams_by_date(exams: &[Exam]) -> Vec<&Exam> {
    let mut out: Vec<&Exam> = exams.iter().collect();
    out.sort_by_key(|e| (e.date, e.time));
    out
}

/// Exams dated today or later, at most three.
pub fn upcoming_exams(exams: &[Exam], today: NaiveDate) -> Vec<&Exam> {
    let mut out: Vec<&Exam> = exams_by_date(exams)
        .into_iter()
        .filter(|e| e.date >= today)
        .collect();
    out.truncate(UPCOMING_EXAMS_LIMIT);
    out
}

/// Signed number of calendar days from `today` to `date`.
pub fn days_remaining(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamUrgency {
    Past,
    Urgent,
    Upcoming,
}

pub fn exam_urgency(date: NaiveDate, today: NaiveDate) -> ExamUrgency {
    match days_remaining(date, today) {
        d if d < 0 => ExamUrgency::Past,
        d if d <= URGENT_WINDOW_DAYS => ExamUrgency::Urgent,
        _ => ExamUrgency::Upcoming,
    }
}

pub fn pending_count(assignments: &[Assignment]) -> usize {
    assignments.iter().filter(|a| a.status.is_pending()).count()
}

/// Name of the referenced class, or "General". Never fails.
pub fn class_name<'a>(classes: &'a [ClassEntry], class_id: Option<&str>) -> &'a str {
    class_id
        .and_then(|id| classes.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or(GENERAL_LABEL)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl AssignmentFilter {
    pub fn accepts(&self, status: Status) -> bool {
        match self {
            AssignmentFilter::All => true,
            AssignmentFilter::Pending => status == Status::Pending,
            AssignmentFilter::Completed => status == Status::Completed,
        }
    }
}

/// Assignment list view: Pending before Completed, each by due date.
pub fn sorted_assignments(assignments: &[Assignment], filter: AssignmentFilter) -> Vec<&Assignment> {
    let mut out: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| filter.accepts(a.status))
        .collect();
    out.sort_by_key(|a| (!a.status.is_pending(), a.due_date));
    out
}

/// Everything the daily dashboard shows.
#[derive(Debug)]
pub struct Dashboard<'a> {
    pub today: NaiveDate,
    pub day: Day,
    pub date_label: String,
    pub greeting_name: &'a str,
    pub classes: Vec<TodayClass<'a>>,
    pub due_soon: Vec<&'a Assignment>,
    pub upcoming_exams: Vec<&'a Exam>,
    pub pending_count: usize,
    pub upcoming_exam_count: usize,
}

impl<'a> Dashboard<'a> {
    pub fn build<S: KeyValueStore>(state: &'a AppState<S>, today: NaiveDate) -> Self {
        let upcoming = upcoming_exams(state.exams(), today);
        Self {
            today,
            day: Day::of(&today),
            date_label: date::long_date(&today),
            greeting_name: state.username(),
            classes: todays_schedule(state.classes(), today),
            due_soon: upcoming_assignments(state.assignments(), today),
            pending_count: pending_count(state.assignments()),
            upcoming_exam_count: upcoming.len(),
            upcoming_exams: upcoming,
        }
    }

    pub fn next_exam(&self) -> Option<&'a Exam> {
        self.upcoming_exams.first().copied()
    }
}
