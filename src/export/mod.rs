// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use self::csv::write_csv;
pub use fs_utils::ensure_writable;
pub use json::write_json;
pub use model::{AssignmentRow, ClassRow, ExamRow};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed ({count} rows): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which collection to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Classes,
    Assignments,
    Exams,
}

impl ExportTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ExportTarget::Classes => "Classes",
            ExportTarget::Assignments => "Assignments",
            ExportTarget::Exams => "Exams",
        }
    }
}
