use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Colour-scheme preference used when no theme has been chosen yet.
    #[serde(default)]
    pub prefers_dark: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

/// Field names every complete config file carries.
pub const CONFIG_FIELDS: [&str; 4] = ["database", "prefers_dark", "separator_char", "show_weekday"];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            prefers_dark: false,
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studydesk")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".studydesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studydesk.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studydesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or malformed file is reported and ignored.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path)
            .map_err(crate::errors::AppError::from)
            .and_then(|content| Ok(serde_yaml::from_str::<Config>(&content)?))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Fields absent from the config file at `path` (they take defaults).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = value.as_mapping();

        Ok(CONFIG_FIELDS
            .into_iter()
            .filter(|field| {
                map.map(|m| !m.contains_key(serde_yaml::Value::String(field.to_string())))
                    .unwrap_or(true)
            })
            .collect())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
