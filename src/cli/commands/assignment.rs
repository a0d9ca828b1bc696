use super::{open_session, record, report_unknown};
use crate::cli::parser::{AssignmentAction, Commands};
use crate::config::Config;
use crate::core::derive::{class_name, days_remaining, sorted_assignments};
use crate::errors::{AppError, AppResult};
use crate::models::{AssignmentPatch, NewAssignment, Priority, Status};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, color_for_priority, paint};
use crate::utils::formatting::{describe_days_left, wrap_indented};
use crate::utils::ids::resolve_prefix;
use crate::utils::table::Table;
use crate::utils::{date, short_id};

const DESCRIPTION_WIDTH: usize = 72;

fn parse_due(raw: &str) -> AppResult<chrono::NaiveDate> {
    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Assignment { action } = cmd else {
        return Ok(());
    };

    let mut state = open_session(cfg)?;

    match action {
        AssignmentAction::Add {
            title,
            description,
            class,
            due,
            priority,
        } => {
            let class_id = class
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| resolve_prefix(state.classes().iter().map(|c| c.id.as_str()), raw))
                .transpose()?;

            let data = NewAssignment {
                description: description.trim().to_string(),
                class_id,
                priority: priority.parse::<Priority>()?,
                ..NewAssignment::new(title.trim(), parse_due(due)?)
            };

            let id = state.add_assignment(data);
            record(&state, "add", &format!("assignment {}", short_id(&id)), title);
            success(format!("Assignment '{}' added ({})", title, short_id(&id)));
        }

        AssignmentAction::List { filter } => {
            let items = sorted_assignments(state.assignments(), (*filter).into());
            if items.is_empty() {
                info("No assignments to show.");
                return Ok(());
            }

            let today = date::today();
            let mut table = Table::new(["ID", "TITLE", "CLASS", "DUE", "", "PRIORITY", "STATUS"]);
            for a in &items {
                let status = if a.status == Status::Completed {
                    paint(GREEN, a.status.as_str())
                } else {
                    a.status.to_string()
                };
                table.add_row(vec![
                    short_id(&a.id).to_string(),
                    a.title.clone(),
                    class_name(state.classes(), a.class_id.as_deref()).to_string(),
                    date::short_date(&a.due_date, cfg.show_weekday),
                    describe_days_left(days_remaining(a.due_date, today)),
                    paint(color_for_priority(a.priority), a.priority.as_str()),
                    status,
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));

            let described: Vec<_> = items.iter().filter(|a| !a.description.is_empty()).collect();
            if !described.is_empty() {
                println!();
                for a in described {
                    println!("{} {}", short_id(&a.id), a.title);
                    println!("{}", wrap_indented(&a.description, DESCRIPTION_WIDTH, "    "));
                }
            }
        }

        AssignmentAction::Update {
            id,
            title,
            description,
            class,
            due,
            priority,
        } => {
            let id = resolve_prefix(state.assignments().iter().map(|a| a.id.as_str()), id)?;

            let class_id = match class.as_deref() {
                None => None,
                Some(raw) if raw.trim().is_empty() => Some(None),
                Some(raw) => Some(Some(resolve_prefix(
                    state.classes().iter().map(|c| c.id.as_str()),
                    raw,
                )?)),
            };

            let patch = AssignmentPatch {
                title: title.clone(),
                description: description.clone(),
                class_id,
                due_date: due.as_deref().map(parse_due).transpose()?,
                priority: priority.as_deref().map(str::parse::<Priority>).transpose()?,
                status: None,
            };
            if patch.is_empty() {
                info("Nothing to update.");
                return Ok(());
            }

            if state.update_assignment(&id, patch) {
                record(&state, "edit", &format!("assignment {}", short_id(&id)), "Assignment updated");
                success(format!("Assignment {} updated.", short_id(&id)));
            } else {
                report_unknown("assignment", &id);
            }
        }

        AssignmentAction::Toggle { id } => {
            let id = resolve_prefix(state.assignments().iter().map(|a| a.id.as_str()), id)?;

            match state.toggle_assignment_status(&id) {
                Some(status) => {
                    record(
                        &state,
                        "toggle",
                        &format!("assignment {}", short_id(&id)),
                        &format!("Marked {}", status),
                    );
                    success(format!("Assignment {} is now {}.", short_id(&id), status));
                }
                None => report_unknown("assignment", &id),
            }
        }

        AssignmentAction::Del { id } => {
            let id = resolve_prefix(state.assignments().iter().map(|a| a.id.as_str()), id)?;
            let title = state.find_assignment(&id).map(|a| a.title.clone()).unwrap_or_default();

            if state.delete_assignment(&id) {
                record(&state, "del", &format!("assignment {}", short_id(&id)), &title);
                success(format!("Assignment '{}' deleted.", title));
            } else {
                report_unknown("assignment", &id);
            }
        }
    }

    Ok(())
}
