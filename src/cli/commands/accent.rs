use super::{open_state, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{AccentColor, THEME_PRESETS};
use crate::ui::messages::{info, success};
use crate::utils::colors::swatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Accent { set, list } = cmd {
        let mut state = open_state(cfg)?;

        if let Some(key) = set {
            let accent = key.parse::<AccentColor>()?;
            let preset = state.set_accent_color(accent);
            record(&state, "accent", preset.key, "Accent color changed");
            success(format!("Accent color set to {} {}", preset.name, swatch(preset.primary)));
        }

        if *list {
            let current = state.accent_color();
            for p in THEME_PRESETS.iter() {
                let marker = if p.key == current.key() { "*" } else { " " };
                println!(
                    "{} {:<7} {} {} {}  primary {}  hover {}  light {}",
                    marker,
                    p.key,
                    swatch(p.primary),
                    swatch(p.hover),
                    swatch(p.light),
                    p.primary,
                    p.hover,
                    p.light
                );
            }
        } else if set.is_none() {
            let p = state.accent_preset();
            info(format!("Current accent color: {} {}", p.name, swatch(p.primary)));
        }
    }

    Ok(())
}
