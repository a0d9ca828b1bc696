use crate::errors::AppResult;
use serde::Serialize;
use std::path::Path;

/// Write `items` as pretty JSON, in the same shape the store persists.
pub fn write_json<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}
