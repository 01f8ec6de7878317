use crate::utils::tokenizer::SplitMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

const APP_NAME: &str = "linedex";
const CONFIG_FILE: &str = "config.json";

/// When to colour terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How records and queries are split into words
    #[serde(default)]
    pub split_mode: SplitMode,

    /// Build the index once at startup instead of before every search
    #[serde(default = "default_cache_index")]
    pub cache_index: bool,

    #[serde(default)]
    pub color: ColorMode,

    /// Filter directive for diagnostics on stderr (e.g. "warn", "linedex=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_cache_index() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::default(),
            cache_index: default_cache_index(),
            color: ColorMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Path of the config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
