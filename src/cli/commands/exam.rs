use super::{open_session, record, report_unknown};
use crate::cli::parser::{Commands, ExamAction};
use crate::config::Config;
use crate::core::derive::{ExamUrgency, class_name, days_remaining, exam_urgency, exams_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::{ExamType, NewExam};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RED, paint};
use crate::utils::formatting::{days_left_label, wrap_indented};
use crate::utils::ids::resolve_prefix;
use crate::utils::table::Table;
use crate::utils::{date, short_id, time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Exam { action } = cmd else {
        return Ok(());
    };

    let mut state = open_session(cfg)?;

    match action {
        ExamAction::Add {
            title,
            class,
            date: date_str,
            time: time_str,
            topics,
            kind,
        } => {
            let class_id = class
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| resolve_prefix(state.classes().iter().map(|c| c.id.as_str()), raw))
                .transpose()?;

            let data = NewExam {
                title: title.trim().to_string(),
                class_id,
                date: date::parse_date(date_str)
                    .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?,
                time: time::parse_time(time_str)
                    .ok_or_else(|| AppError::InvalidTime(time_str.clone()))?,
                topics: topics.trim().to_string(),
                kind: kind.parse::<ExamType>()?,
            };

            let id = state.add_exam(data);
            record(&state, "add", &format!("exam {}", short_id(&id)), title);
            success(format!("Exam '{}' added ({})", title, short_id(&id)));
        }

        ExamAction::List => {
            let exams = exams_by_date(state.exams());
            if exams.is_empty() {
                info("No exams scheduled.");
                return Ok(());
            }

            let today = date::today();
            let mut table = Table::new(["ID", "TITLE", "CLASS", "TYPE", "DATE", "TIME", "LEFT"]);
            for e in &exams {
                let left = days_left_label(days_remaining(e.date, today));
                let left = match exam_urgency(e.date, today) {
                    ExamUrgency::Past => paint(GREY, &left),
                    ExamUrgency::Urgent => paint(RED, &left),
                    ExamUrgency::Upcoming => left,
                };
                table.add_row(vec![
                    short_id(&e.id).to_string(),
                    e.title.clone(),
                    class_name(state.classes(), e.class_id.as_deref()).to_string(),
                    e.kind.to_string(),
                    date::short_date(&e.date, cfg.show_weekday),
                    time::format_time(&e.time),
                    left,
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));

            for e in exams.iter().filter(|e| !e.topics.is_empty()) {
                println!("\n{} {} topics:", short_id(&e.id), e.title);
                println!("{}", wrap_indented(&e.topics, 72, "    "));
            }
        }

        ExamAction::Del { id } => {
            let id = resolve_prefix(state.exams().iter().map(|e| e.id.as_str()), id)?;
            let title = state.find_exam(&id).map(|e| e.title.clone()).unwrap_or_default();

            if state.delete_exam(&id) {
                record(&state, "del", &format!("exam {}", short_id(&id)), &title);
                success(format!("Exam '{}' deleted.", title));
            } else {
                report_unknown("exam", &id);
            }
        }
    }

    Ok(())
}
