use crate::db::kv::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "toggle" => Colour::Yellow,
        "signin" | "signout" | "profile" => Colour::Cyan,
        "theme" | "accent" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("gpa") => Colour::Purple,
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 60;
const PAD_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        let mut stmt = store.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let entries = rows.collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.width())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut visible = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            if visible.width() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(PAD_WIDTH.saturating_sub(visible_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
