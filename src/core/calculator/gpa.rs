//! Weighted grade-point averages.
//!
//! GPA = sum(units * points) / sum(units), over the courses whose units are
//! known. Courses with absent units count in neither sum. With no units at
//! all the result is 0.

use crate::models::{Course, Semester};

pub fn weighted_gpa<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    let (points, units) = courses
        .into_iter()
        .filter_map(|c| c.units.map(|u| (u, c.grade.points())))
        .fold((0.0, 0.0), |(points, units), (u, p)| {
            (points + u * p, units + u)
        });

    if units == 0.0 { 0.0 } else { points / units }
}

pub fn semester_gpa(semester: &Semester) -> f64 {
    weighted_gpa(&semester.courses)
}

/// CGPA weighs every course of every semester together; it is not the mean
/// of the semester GPAs.
pub fn cumulative_gpa(semesters: &[Semester]) -> f64 {
    weighted_gpa(semesters.iter().flat_map(|s| s.courses.iter()))
}

/// Sum of the known units.
pub fn total_units<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    courses.into_iter().filter_map(|c| c.units).sum()
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn format_gpa(x: f64) -> String {
    format!("{:.2}", round2(x))
}
