// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::date::DateFormat;
use crate::model::table::Delimiter;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_max_age() -> u32 {
    100
}

fn default_output_filename() -> String {
    "birthdays.ics".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub delimiter: Delimiter,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            date_format: DateFormat::default(),
            // Match the serde defaults
            max_age: 100,
            output_filename: "birthdays.ics".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers can fall back to defaults.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration, treating a missing file as defaults.
    /// Any other failure (unreadable file, bad TOML) is still surfaced.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(err) if Self::is_missing_config_error(&err) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, even when wrapped in an IO error chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
