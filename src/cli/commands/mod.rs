pub mod accent;
pub mod assignment;
pub mod backup;
pub mod class;
pub mod config;
pub mod dashboard;
pub mod exam;
pub mod export;
pub mod gpa;
pub mod init;
pub mod log;
pub mod profile;
pub mod theme;

use crate::config::Config;
use crate::core::AppState;
use crate::db::kv::SqliteStore;
use crate::db::log::oplog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub(crate) type Session = AppState<SqliteStore>;

/// Open the configured store and hydrate the container from it.
pub(crate) fn open_state(cfg: &Config) -> AppResult<Session> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(AppState::hydrate(store, cfg.prefers_dark))
}

/// Like `open_state`, but refuses to go on while nobody is signed in.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session> {
    let state = open_state(cfg)?;
    if !state.is_signed_in() {
        return Err(AppError::NotSignedIn);
    }
    Ok(state)
}

/// Record a mutation in the internal log (non-blocking).
pub(crate) fn record(state: &Session, operation: &str, target: &str, message: &str) {
    if let Err(e) = oplog(&state.store().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

pub(crate) fn report_unknown(kind: &str, id: &str) {
    warning(format!("No {} with id '{}': nothing changed.", kind, id));
}
