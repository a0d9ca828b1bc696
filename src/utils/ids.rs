//! Abbreviated id resolution for the command line.

use crate::errors::{AppError, AppResult};

/// Resolve `input` against `ids`: an exact match wins, otherwise a unique
/// prefix expands to the full id. Unmatched input is returned unchanged so
/// the container can treat it as an unknown id.
pub fn resolve_prefix<'a, I>(ids: I, input: &str) -> AppResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.trim();
    let mut matches = Vec::new();

    for id in ids {
        if id == needle {
            return Ok(id.to_string());
        }
        if !needle.is_empty() && id.starts_with(needle) {
            matches.push(id);
        }
    }

    match matches.as_slice() {
        [] => Ok(needle.to_string()),
        [only] => Ok(only.to_string()),
        _ => Err(AppError::AmbiguousId(needle.to_string())),
    }
}
