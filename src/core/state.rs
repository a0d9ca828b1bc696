//! The application state container.
//!
//! `AppState` owns every mutable collection (classes, assignments, exams,
//! GPA semesters) together with the profile and display preferences. It is
//! built once from a [`KeyValueStore`] and mirrors each collection back to
//! that store, under its own key, whenever the collection changes.
//!
//! Writes are best-effort: a failing store is logged and the in-memory state
//! stays authoritative for the rest of the session.

use crate::models::profile::StoredUser;
use crate::models::{
    AccentColor, Assignment, AssignmentPatch, ClassEntry, ClassPatch, ColorPreset, Exam,
    NewAssignment, NewClass, NewExam, ProfilePatch, Semester, Status, Theme, UserProfile, new_id,
};
use crate::store::{
    KEY_ACCENT, KEY_ASSIGNMENTS, KEY_CLASSES, KEY_EXAMS, KEY_GPA, KEY_THEME, KEY_USER,
    KeyValueStore,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

pub struct AppState<S: KeyValueStore> {
    pub(crate) store: S,
    classes: Vec<ClassEntry>,
    assignments: Vec<Assignment>,
    exams: Vec<Exam>,
    user: UserProfile,
    theme: Theme,
    accent: AccentColor,
    pub(crate) semesters: Vec<Semester>,
}

/// Read and decode one JSON key. Absent, unreadable and corrupt values all
/// yield `None`; the last two are logged.
fn load_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = load_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key, error = %e, "corrupt persisted value, using default");
            None
        }
    }
}

/// Decode a JSON array one element at a time: an unreadable entry is dropped
/// and logged, the rest of the collection survives.
fn load_list<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<Vec<T>> {
    let items: Vec<serde_json::Value> = load_json(store, key)?;
    let total = items.len();
    let list: Vec<T> = items
        .into_iter()
        .filter_map(|v| match serde_json::from_value(v) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(key, error = %e, "dropping unreadable entry");
                None
            }
        })
        .collect();
    if list.len() < total {
        warn!(key, kept = list.len(), total, "collection partially restored");
    }
    Some(list)
}

fn load_raw<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted value, using default");
            None
        }
    }
}

pub(crate) fn persist_json<S: KeyValueStore, T: Serialize + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) {
    match serde_json::to_string(value) {
        Ok(json) => persist_raw(store, key, &json),
        Err(e) => error!(key, error = %e, "failed to serialize value"),
    }
}

fn persist_raw<S: KeyValueStore>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        error!(key, error = %e, "failed to persist value");
    }
}

/// Raw string keys may have been written JSON-quoted by other tools.
fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}

pub(crate) fn default_semesters() -> Vec<Semester> {
    vec![Semester::with_blank_course("Semester 1")]
}

impl<S: KeyValueStore> AppState<S> {
    /// Build the container from whatever `store` holds.
    ///
    /// `prefers_dark` is the platform colour-scheme preference, used only
    /// when no theme has been stored yet.
    pub fn hydrate(store: S, prefers_dark: bool) -> Self {
        let classes: Vec<ClassEntry> = load_list(&store, KEY_CLASSES).unwrap_or_default();
        let assignments: Vec<Assignment> = load_list(&store, KEY_ASSIGNMENTS).unwrap_or_default();
        let exams: Vec<Exam> = load_list(&store, KEY_EXAMS).unwrap_or_default();

        let user = load_json::<S, StoredUser>(&store, KEY_USER)
            .map(UserProfile::from)
            .unwrap_or_default();

        let fallback_theme = Theme::from_preference(prefers_dark);
        let theme = match load_raw(&store, KEY_THEME) {
            Some(raw) => Theme::from_key(unquote(&raw)).unwrap_or_else(|| {
                warn!(value = %raw, "unknown stored theme, using platform preference");
                fallback_theme
            }),
            None => fallback_theme,
        };

        let accent = match load_raw(&store, KEY_ACCENT) {
            Some(raw) => AccentColor::from_key(unquote(&raw)).unwrap_or_else(|| {
                warn!(value = %raw, "unknown stored accent color, using default");
                AccentColor::default()
            }),
            None => AccentColor::default(),
        };

        let mut semesters = load_list::<S, Semester>(&store, KEY_GPA)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_semesters);
        for s in semesters.iter_mut().filter(|s| s.courses.is_empty()) {
            debug!(semester = %s.id, "semester without courses, adding a blank row");
            s.courses.push(crate::models::Course::blank());
        }

        debug!(
            classes = classes.len(),
            assignments = assignments.len(),
            exams = exams.len(),
            semesters = semesters.len(),
            "state hydrated"
        );

        Self {
            store,
            classes,
            assignments,
            exams,
            user,
            theme,
            accent,
            semesters,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End of the container's lifecycle; hands the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn classes(&self) -> &[ClassEntry] {
        &self.classes
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn username(&self) -> &str {
        self.user.username()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_signed_in()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn accent_color(&self) -> AccentColor {
        self.accent
    }

    pub fn accent_preset(&self) -> &'static ColorPreset {
        self.accent.preset()
    }

    pub fn find_class(&self, id: &str) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn find_assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn find_exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    // ---------------------------
    // Classes
    // ---------------------------

    pub fn add_class(&mut self, data: NewClass) -> String {
        let id = new_id();
        self.classes.push(data.into_entry(id.clone()));
        debug!(id = %id, "class added");
        self.persist_classes();
        id
    }

    /// Merge `patch` into the class with `id`. Returns false (and changes
    /// nothing) when no class matches.
    pub fn update_class(&mut self, id: &str, patch: ClassPatch) -> bool {
        let Some(entry) = self.classes.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        patch.apply(entry);
        debug!(id, "class updated");
        self.persist_classes();
        true
    }

    pub fn delete_class(&mut self, id: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != id);
        if self.classes.len() == before {
            return false;
        }
        debug!(id, "class deleted");
        self.persist_classes();
        true
    }

    fn persist_classes(&mut self) {
        persist_json(&mut self.store, KEY_CLASSES, &self.classes);
    }

    // ---------------------------
    // Assignments
    // ---------------------------

    /// New assignments always start as `Pending`, whatever the input says.
    pub fn add_assignment(&mut self, data: NewAssignment) -> String {
        let id = new_id();
        self.assignments.push(data.into_assignment(id.clone()));
        debug!(id = %id, "assignment added");
        self.persist_assignments();
        id
    }

    pub fn update_assignment(&mut self, id: &str, patch: AssignmentPatch) -> bool {
        let Some(a) = self.assignments.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        patch.apply(a);
        debug!(id, "assignment updated");
        self.persist_assignments();
        true
    }

    pub fn delete_assignment(&mut self, id: &str) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        if self.assignments.len() == before {
            return false;
        }
        debug!(id, "assignment deleted");
        self.persist_assignments();
        true
    }

    /// Flip Pending <-> Completed. Returns the new status, or `None` when
    /// no assignment has this id.
    pub fn toggle_assignment_status(&mut self, id: &str) -> Option<Status> {
        let a = self.assignments.iter_mut().find(|a| a.id == id)?;
        a.status = a.status.toggled();
        let status = a.status;
        debug!(id, status = %status, "assignment status toggled");
        self.persist_assignments();
        Some(status)
    }

    fn persist_assignments(&mut self) {
        persist_json(&mut self.store, KEY_ASSIGNMENTS, &self.assignments);
    }

    // ---------------------------
    // Exams
    // ---------------------------

    pub fn add_exam(&mut self, data: NewExam) -> String {
        let id = new_id();
        self.exams.push(data.into_exam(id.clone()));
        debug!(id = %id, "exam added");
        self.persist_exams();
        id
    }

    pub fn delete_exam(&mut self, id: &str) -> bool {
        let before = self.exams.len();
        self.exams.retain(|e| e.id != id);
        if self.exams.len() == before {
            return false;
        }
        debug!(id, "exam deleted");
        self.persist_exams();
        true
    }

    fn persist_exams(&mut self) {
        persist_json(&mut self.store, KEY_EXAMS, &self.exams);
    }

    // ---------------------------
    // Profile
    // ---------------------------

    pub fn update_user_profile(&mut self, patch: ProfilePatch) {
        patch.apply(&mut self.user);
        debug!(signed_in = self.user.is_signed_in(), "profile updated");
        persist_json(&mut self.store, KEY_USER, &self.user);
    }

    /// Record the identity that opens the main application.
    pub fn sign_in(&mut self, profile: UserProfile) {
        self.update_user_profile(profile.into());
    }

    /// Explicitly forget the identity. Nothing else ever clears it.
    pub fn sign_out(&mut self) {
        self.user = UserProfile::default();
        debug!("profile cleared");
        if let Err(e) = self.store.remove(KEY_USER) {
            error!(key = KEY_USER, error = %e, "failed to remove value");
        }
    }

    // ---------------------------
    // Display preferences
    // ---------------------------

    /// Flip light <-> dark; the new theme is readable immediately.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        persist_raw(&mut self.store, KEY_THEME, self.theme.as_str());
        self.theme
    }

    pub fn set_accent_color(&mut self, accent: AccentColor) -> &'static ColorPreset {
        self.accent = accent;
        persist_raw(&mut self.store, KEY_ACCENT, accent.key());
        accent.preset()
    }
}
