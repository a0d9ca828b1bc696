use super::{open_session, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        force,
    } = cmd
    {
        let state = open_session(cfg)?;
        let path = expand_tilde(file);
        let path = path.to_string_lossy();

        let count = ExportLogic::export(&state, *what, *format, &path, *force)?;
        record(
            &state,
            "export",
            &path,
            &format!("{} {} exported as {}", count, what.label(), format.as_str()),
        );
    }
    Ok(())
}
