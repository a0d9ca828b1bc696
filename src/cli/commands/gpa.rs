//! GPA calculator commands.

use super::{Session, open_session, record, report_unknown};
use crate::cli::parser::{Commands, CourseAction, GpaAction, SemesterAction};
use crate::config::Config;
use crate::core::calculator::gpa::{cumulative_gpa, format_gpa, semester_gpa, total_units};
use crate::errors::AppResult;
use crate::models::gpa::parse_units;
use crate::models::{CoursePatch, Grade};
use crate::ui::messages::{header, info, success};
use crate::utils::ids::resolve_prefix;
use crate::utils::short_id;
use crate::utils::table::Table;

fn semester_id(state: &Session, raw: &str) -> AppResult<String> {
    resolve_prefix(state.semesters().iter().map(|s| s.id.as_str()), raw)
}

fn course_id(state: &Session, semester: &str, raw: &str) -> AppResult<String> {
    match state.find_semester(semester) {
        Some(s) => resolve_prefix(s.courses.iter().map(|c| c.id.as_str()), raw),
        None => Ok(raw.to_string()),
    }
}

fn units_label(units: Option<f64>) -> String {
    units.map(|u| u.to_string()).unwrap_or_else(|| "-".to_string())
}

fn show(state: &Session, cfg: &Config) {
    for s in state.semesters() {
        header(format!("{} ({})", s.name, short_id(&s.id)));

        let mut table = Table::new(["ID", "COURSE", "UNITS", "GRADE", "POINTS"]);
        for c in &s.courses {
            table.add_row(vec![
                short_id(&c.id).to_string(),
                if c.name.is_empty() { "(unnamed)".to_string() } else { c.name.clone() },
                units_label(c.units),
                c.grade.to_string(),
                format!("{}", c.grade.points()),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));

        println!(
            "GPA: {}  ({} units)\n",
            format_gpa(semester_gpa(s)),
            total_units(&s.courses)
        );
    }

    println!("CGPA: {}", format_gpa(cumulative_gpa(state.semesters())));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Gpa { action } = cmd else {
        return Ok(());
    };

    let mut state = open_session(cfg)?;

    match action {
        GpaAction::Show => show(&state, cfg),

        GpaAction::Semester { action } => match action {
            SemesterAction::Add => {
                let id = state.add_semester();
                let name = state.find_semester(&id).map(|s| s.name.clone()).unwrap_or_default();
                record(&state, "gpa add", &format!("semester {}", short_id(&id)), &name);
                success(format!("{} added ({})", name, short_id(&id)));
            }
            SemesterAction::Del { id } => {
                let id = semester_id(&state, id)?;
                if state.remove_semester(&id)? {
                    record(&state, "gpa del", &format!("semester {}", short_id(&id)), "Semester removed");
                    success(format!("Semester {} removed.", short_id(&id)));
                } else {
                    report_unknown("semester", &id);
                }
            }
            SemesterAction::Rename { id, name } => {
                let id = semester_id(&state, id)?;
                if state.rename_semester(&id, name.trim()) {
                    record(&state, "gpa edit", &format!("semester {}", short_id(&id)), name);
                    success(format!("Semester {} renamed to '{}'.", short_id(&id), name.trim()));
                } else {
                    report_unknown("semester", &id);
                }
            }
        },

        GpaAction::Course { action } => match action {
            CourseAction::Add { semester } => {
                let sem = semester_id(&state, semester)?;
                match state.add_course(&sem) {
                    Some(id) => {
                        record(&state, "gpa add", &format!("course {}", short_id(&id)), "Blank course added");
                        success(format!(
                            "Course {} added. Fill it in with `studydesk gpa course set {} {} ...`",
                            short_id(&id),
                            short_id(&sem),
                            short_id(&id)
                        ));
                    }
                    None => report_unknown("semester", &sem),
                }
            }
            CourseAction::Del { semester, course } => {
                let sem = semester_id(&state, semester)?;
                let id = course_id(&state, &sem, course)?;
                if state.remove_course(&sem, &id)? {
                    record(&state, "gpa del", &format!("course {}", short_id(&id)), "Course removed");
                    success(format!("Course {} removed.", short_id(&id)));
                } else {
                    report_unknown("course", &id);
                }
            }
            CourseAction::Set {
                semester,
                course,
                name,
                units,
                grade,
            } => {
                let sem = semester_id(&state, semester)?;
                let id = course_id(&state, &sem, course)?;

                if let Some(raw) = units.as_deref()
                    && !raw.trim().is_empty()
                    && parse_units(raw).is_none()
                {
                    info(format!("'{}' is not a unit count: the course is left out of the GPA.", raw));
                }

                let patch = CoursePatch {
                    name: name.as_deref().map(|n| n.trim().to_string()),
                    units: units.as_deref().map(parse_units),
                    grade: grade.as_deref().map(str::parse::<Grade>).transpose()?,
                };

                if state.update_course(&sem, &id, patch) {
                    record(&state, "gpa edit", &format!("course {}", short_id(&id)), "Course updated");
                    if let Some(s) = state.find_semester(&sem) {
                        success(format!(
                            "Course {} updated. {} GPA: {}",
                            short_id(&id),
                            s.name,
                            format_gpa(semester_gpa(s))
                        ));
                    }
                } else {
                    report_unknown("course", &id);
                }
            }
        },
    }

    Ok(())
}
