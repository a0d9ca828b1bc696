use super::{open_state, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { toggle } = cmd {
        let mut state = open_state(cfg)?;

        if *toggle {
            let theme = state.toggle_theme();
            record(&state, "theme", theme.as_str(), "Theme toggled");
            success(format!("Theme switched to {}.", theme));
        } else {
            info(format!("Current theme: {}", state.theme()));
        }
    }

    Ok(())
}
