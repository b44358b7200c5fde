use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub birthdays: BirthdaysConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdaysConfig {
    pub default_window_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Enter a command: ".to_string(),
            birthdays: BirthdaysConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self { default_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Config {
    /// Loads `path` when given, otherwise the per-user config file.
    ///
    /// A missing per-user file means defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file {} does not exist", path.display());
                }
                Self::load_from(path)
            }
            None => match get_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }
}

fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "addressbook", "addressbook")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
