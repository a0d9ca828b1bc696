//! `signin`, `signout` and `profile`.

use super::{open_session, open_state, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ProfilePatch, UserProfile};
use crate::ui::messages::{header, info, success};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

fn required(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(v.to_string())
}

fn checked_email(value: &str) -> AppResult<String> {
    let v = required("email", value)?;
    if !EMAIL.is_match(&v) {
        return Err(AppError::InvalidInput(format!("'{v}' is not an email address")));
    }
    Ok(v)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Signin {
            name,
            school,
            email,
        } => {
            let profile = UserProfile {
                name: required("name", name)?,
                school: required("school", school)?,
                email: checked_email(email)?,
            };

            let mut state = open_state(cfg)?;
            if state.is_signed_in() && state.username() != profile.name {
                info(format!("Replacing identity '{}'.", state.username()));
            }
            state.sign_in(profile);
            record(&state, "signin", state.username(), "Identity recorded");
            success(format!("Welcome, {}!", state.username()));
        }

        Commands::Signout => {
            let mut state = open_session(cfg)?;
            let name = state.username().to_string();
            state.sign_out();
            record(&state, "signout", &name, "Identity cleared");
            success(format!("Signed out. Goodbye, {}.", name));
        }

        Commands::Profile {
            name,
            school,
            email,
        } => {
            let mut state = open_session(cfg)?;

            let patch = ProfilePatch {
                name: name.as_deref().map(|n| required("name", n)).transpose()?,
                school: school.clone(),
                email: email.as_deref().map(checked_email).transpose()?,
            };

            if !patch.is_empty() {
                state.update_user_profile(patch);
                record(&state, "profile", state.username(), "Profile updated");
                success("Profile updated.");
            }

            let user = state.user();
            header("Profile");
            println!("Name   : {}", user.name);
            println!("School : {}", user.school);
            println!("Email  : {}", user.email);
        }

        _ => {}
    }

    Ok(())
}
