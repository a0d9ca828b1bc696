use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// English ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, 11th, 22nd...
pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// "Sunday, October 18th"
pub fn long_date(d: &NaiveDate) -> String {
    format!("{} {}", d.format("%A, %B"), ordinal(d.day()))
}

/// "Sunday, Oct 18th"
pub fn medium_date(d: &NaiveDate) -> String {
    format!("{} {}", d.format("%A, %b"), ordinal(d.day()))
}

/// "2026-10-18" or "2026-10-18 (Sun)" depending on `show_weekday`.
pub fn short_date(d: &NaiveDate, show_weekday: bool) -> String {
    if show_weekday {
        format!("{} ({})", d.format("%Y-%m-%d"), d.format("%a"))
    } else {
        d.format("%Y-%m-%d").to_string()
    }
}
