use crate::core::derive::{AssignmentFilter, exams_by_date, sorted_assignments};
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::{
    AssignmentRow, ClassRow, ExamRow, ExportFormat, ExportTarget, ensure_writable,
    notify_export_success, write_csv, write_json,
};
use crate::store::KeyValueStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one collection. Returns the number of exported entries.
    pub fn export<S: KeyValueStore>(
        state: &AppState<S>,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        ensure_writable(path, force)?;

        let count = match (target, format) {
            (ExportTarget::Classes, ExportFormat::Json) => {
                write_json(path, state.classes())?;
                state.classes().len()
            }
            (ExportTarget::Classes, ExportFormat::Csv) => {
                let rows: Vec<ClassRow> = state.classes().iter().map(ClassRow::from).collect();
                write_csv(path, &rows)?;
                rows.len()
            }
            (ExportTarget::Assignments, ExportFormat::Json) => {
                write_json(path, state.assignments())?;
                state.assignments().len()
            }
            (ExportTarget::Assignments, ExportFormat::Csv) => {
                let rows: Vec<AssignmentRow> =
                    sorted_assignments(state.assignments(), AssignmentFilter::All)
                        .into_iter()
                        .map(|a| AssignmentRow::new(a, state.classes()))
                        .collect();
                write_csv(path, &rows)?;
                rows.len()
            }
            (ExportTarget::Exams, ExportFormat::Json) => {
                write_json(path, state.exams())?;
                state.exams().len()
            }
            (ExportTarget::Exams, ExportFormat::Csv) => {
                let rows: Vec<ExamRow> = exams_by_date(state.exams())
                    .into_iter()
                    .map(|e| ExamRow::new(e, state.classes()))
                    .collect();
                write_csv(path, &rows)?;
                rows.len()
            }
        };

        notify_export_success(target.label(), count, path);
        Ok(count)
    }
}
