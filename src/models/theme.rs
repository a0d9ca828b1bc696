use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colours applied by the presentation layer for one accent choice.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub hover: &'static str,
    pub light: &'static str,
    pub gradient: &'static str,
}

pub static THEME_PRESETS: [ColorPreset; 5] = [
    ColorPreset {
        key: "violet",
        name: "Violet",
        primary: "#6d28d9",
        hover: "#5b21b6",
        light: "#ddd6fe",
        gradient: "linear-gradient(135deg, #6d28d9 0%, #a855f7 100%)",
    },
    ColorPreset {
        key: "ocean",
        name: "Ocean",
        primary: "#2563eb",
        hover: "#1d4ed8",
        light: "#dbeafe",
        gradient: "linear-gradient(135deg, #2563eb 0%, #3b82f6 100%)",
    },
    ColorPreset {
        key: "teal",
        name: "Teal",
        primary: "#0d9488",
        hover: "#0f766e",
        light: "#ccfbf1",
        gradient: "linear-gradient(135deg, #0d9488 0%, #2dd4bf 100%)",
    },
    ColorPreset {
        key: "rose",
        name: "Rose",
        primary: "#e11d48",
        hover: "#be123c",
        light: "#ffe4e6",
        gradient: "linear-gradient(135deg, #e11d48 0%, #f43f5e 100%)",
    },
    ColorPreset {
        key: "amber",
        name: "Amber",
        primary: "#d97706",
        hover: "#b45309",
        light: "#fef3c7",
        gradient: "linear-gradient(135deg, #d97706 0%, #f59e0b 100%)",
    },
];

/// Key into `THEME_PRESETS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Violet,
    Ocean,
    Teal,
    Rose,
    Amber,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Violet,
        AccentColor::Ocean,
        AccentColor::Teal,
        AccentColor::Rose,
        AccentColor::Amber,
    ];

    pub fn preset(&self) -> &'static ColorPreset {
        let idx = match self {
            AccentColor::Violet => 0,
            AccentColor::Ocean => 1,
            AccentColor::Teal => 2,
            AccentColor::Rose => 3,
            AccentColor::Amber => 4,
        };
        &THEME_PRESETS[idx]
    }

    pub fn key(&self) -> &'static str {
        self.preset().key
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        AccentColor::ALL.into_iter().find(|a| a.key() == lower)
    }
}

impl FromStr for AccentColor {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        AccentColor::from_key(s).ok_or_else(|| {
            let keys: Vec<&str> = THEME_PRESETS.iter().map(|p| p.key).collect();
            AppError::InvalidInput(format!(
                "accent color '{s}' (expected one of {})",
                keys.join(", ")
            ))
        })
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
