use super::{open_session, record, report_unknown};
use crate::cli::parser::{ClassAction, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{ClassPatch, NewClass, ScheduleSlot};
use crate::ui::messages::{info, success};
use crate::utils::ids::resolve_prefix;
use crate::utils::short_id;
use crate::utils::table::Table;

fn parse_slots(raw: &[String]) -> AppResult<Vec<ScheduleSlot>> {
    raw.iter().map(|s| s.parse::<ScheduleSlot>()).collect()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Class { action } = cmd else {
        return Ok(());
    };

    let mut state = open_session(cfg)?;

    match action {
        ClassAction::Add {
            name,
            teacher,
            room,
            slots,
        } => {
            let schedule = parse_slots(slots)?;
            if schedule.is_empty() {
                info("No --slot given: the class has no weekly schedule yet.");
            }
            let id = state.add_class(NewClass {
                name: name.trim().to_string(),
                teacher: teacher.trim().to_string(),
                room: room.trim().to_string(),
                schedule,
            });
            record(&state, "add", &format!("class {}", short_id(&id)), name);
            success(format!("Class '{}' added ({})", name, short_id(&id)));
        }

        ClassAction::List => {
            if state.classes().is_empty() {
                info("No classes yet. Add one with `studydesk class add`.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "NAME", "TEACHER", "ROOM", "SCHEDULE"]);
            for c in state.classes() {
                table.add_row(vec![
                    short_id(&c.id).to_string(),
                    c.name.clone(),
                    c.teacher.clone(),
                    c.room.clone(),
                    c.schedule_summary(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        ClassAction::Update {
            id,
            name,
            teacher,
            room,
            slots,
            clear_schedule,
        } => {
            let id = resolve_prefix(state.classes().iter().map(|c| c.id.as_str()), id)?;

            let schedule = if *clear_schedule {
                Some(Vec::new())
            } else if slots.is_empty() {
                None
            } else {
                Some(parse_slots(slots)?)
            };

            let patch = ClassPatch {
                name: name.clone(),
                teacher: teacher.clone(),
                room: room.clone(),
                schedule,
            };
            if patch.is_empty() {
                info("Nothing to update.");
                return Ok(());
            }

            if state.update_class(&id, patch) {
                record(&state, "edit", &format!("class {}", short_id(&id)), "Class updated");
                success(format!("Class {} updated.", short_id(&id)));
            } else {
                report_unknown("class", &id);
            }
        }

        ClassAction::Del { id } => {
            let id = resolve_prefix(state.classes().iter().map(|c| c.id.as_str()), id)?;
            let name = state.find_class(&id).map(|c| c.name.clone());

            if state.delete_class(&id) {
                record(
                    &state,
                    "del",
                    &format!("class {}", short_id(&id)),
                    name.as_deref().unwrap_or_default(),
                );
                success(format!(
                    "Class '{}' deleted. Items linked to it now show as General.",
                    name.unwrap_or_default()
                ));
            } else {
                report_unknown("class", &id);
            }
        }
    }

    Ok(())
}
