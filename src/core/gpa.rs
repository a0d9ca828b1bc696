//! GPA sub-model operations. Semesters are persisted under `gpa_data`,
//! independently of the other collections.

use crate::core::state::{AppState, persist_json};
use crate::errors::{AppError, AppResult};
use crate::models::{Course, CoursePatch, Semester};
use crate::store::{KEY_GPA, KeyValueStore};
use tracing::debug;

impl<S: KeyValueStore> AppState<S> {
    pub fn find_semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    /// Append "Semester N" with one blank course; returns its id.
    pub fn add_semester(&mut self) -> String {
        let semester = Semester::with_blank_course(format!("Semester {}", self.semesters.len() + 1));
        let id = semester.id.clone();
        self.semesters.push(semester);
        debug!(id = %id, "semester added");
        self.persist_semesters();
        id
    }

    /// The last remaining semester cannot be removed.
    pub fn remove_semester(&mut self, id: &str) -> AppResult<bool> {
        let Some(idx) = self.semesters.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        if self.semesters.len() == 1 {
            return Err(AppError::LastSemester);
        }
        self.semesters.remove(idx);
        debug!(id, "semester removed");
        self.persist_semesters();
        Ok(true)
    }

    pub fn rename_semester(&mut self, id: &str, name: &str) -> bool {
        let Some(s) = self.semesters.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        s.name = name.to_string();
        self.persist_semesters();
        true
    }

    /// Append a blank course row; `None` if the semester does not exist.
    pub fn add_course(&mut self, semester_id: &str) -> Option<String> {
        let s = self.semesters.iter_mut().find(|s| s.id == semester_id)?;
        let course = Course::blank();
        let id = course.id.clone();
        s.courses.push(course);
        debug!(semester = semester_id, id = %id, "course added");
        self.persist_semesters();
        Some(id)
    }

    /// A semester always keeps at least one course row.
    pub fn remove_course(&mut self, semester_id: &str, course_id: &str) -> AppResult<bool> {
        let Some(s) = self.semesters.iter_mut().find(|s| s.id == semester_id) else {
            return Ok(false);
        };
        let Some(idx) = s.courses.iter().position(|c| c.id == course_id) else {
            return Ok(false);
        };
        if s.courses.len() == 1 {
            return Err(AppError::LastCourse);
        }
        s.courses.remove(idx);
        debug!(semester = semester_id, id = course_id, "course removed");
        self.persist_semesters();
        Ok(true)
    }

    pub fn update_course(&mut self, semester_id: &str, course_id: &str, patch: CoursePatch) -> bool {
        let Some(course) = self
            .semesters
            .iter_mut()
            .find(|s| s.id == semester_id)
            .and_then(|s| s.courses.iter_mut().find(|c| c.id == course_id))
        else {
            return false;
        };
        patch.apply(course);
        self.persist_semesters();
        true
    }

    fn persist_semesters(&mut self) {
        persist_json(&mut self.store, KEY_GPA, &self.semesters);
    }
}
