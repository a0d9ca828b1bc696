use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::{Dashboard, class_name, days_remaining};
use crate::errors::AppResult;
use crate::ui::messages::section;
use crate::utils::colors::{color_for_days_left, color_for_priority, paint};
use crate::utils::formatting::{days_left_label, describe_days_left};
use crate::utils::{date, time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Dashboard) {
        return Ok(());
    }

    let state = open_session(cfg)?;
    let dash = Dashboard::build(&state, date::today());

    println!("👋 Hello, {}!", dash.greeting_name);
    println!("{}\n", dash.date_label);

    println!(
        "Pending assignments: {}   Upcoming exams: {}",
        dash.pending_count, dash.upcoming_exam_count
    );

    section(format!("Today's classes ({})", dash.day));
    if dash.classes.is_empty() {
        println!("No classes today.");
    }
    for t in &dash.classes {
        let place = if t.class.room.is_empty() {
            String::new()
        } else {
            format!(" @ {}", t.class.room)
        };
        println!("{}  {}{}", t.slot.time_range(), t.class.name, place);
    }

    section("Due soon");
    if dash.due_soon.is_empty() {
        println!("Nothing pending. Nice!");
    }
    for a in &dash.due_soon {
        println!(
            "{} [{}] {} ({}, {})",
            paint(color_for_priority(a.priority), "●"),
            class_name(state.classes(), a.class_id.as_deref()),
            a.title,
            date::short_date(&a.due_date, cfg.show_weekday),
            describe_days_left(days_remaining(a.due_date, dash.today)),
        );
    }

    section("Upcoming exams");
    if dash.upcoming_exams.is_empty() {
        println!("No upcoming exams.");
    }
    for e in &dash.upcoming_exams {
        let days = days_remaining(e.date, dash.today);
        println!(
            "{} {} at {}  {}  {}",
            date::medium_date(&e.date),
            e.title,
            time::format_time(&e.time),
            e.kind,
            paint(color_for_days_left(days), &days_left_label(days)),
        );
    }

    if let Some(next) = dash.next_exam() {
        println!(
            "\nNext exam: {} ({})",
            next.title,
            describe_days_left(days_remaining(next.date, dash.today))
        );
    }

    Ok(())
}
