use crate::errors::{AppError, AppResult};
use crate::models::filter::FilterMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys a complete configuration file carries; used by `config --check`.
pub const REQUIRED_KEYS: [&str; 4] = ["api_base", "default_mode", "per_page", "datetime_format"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the summit administration API.
    pub api_base: String,

    /// Clause combination mode used when --mode is not given ("all"/"any").
    #[serde(default = "default_mode")]
    pub default_mode: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// chrono format used to parse and display datetimes.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_mode() -> String {
    "all".to_string()
}
fn default_per_page() -> u32 {
    10
}
fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.summit.example.com/api/v1".to_string(),
            default_mode: default_mode(),
            per_page: default_per_page(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".summitq"),
            None => PathBuf::from("."),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("summitq.yaml")
    }

    /// Load configuration from the default path, or return defaults if not
    /// found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(Self::config_file())
    }

    /// Load configuration from an explicit path, or return defaults if not
    /// found.
    pub fn load_from(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// The effective filter mode; an unrecognized value falls back to AND.
    pub fn mode(&self) -> FilterMode {
        FilterMode::from_param(&self.default_mode).unwrap_or_default()
    }

    /// Initialize the configuration file (custom path or default location).
    /// Returns the path written or already present.
    pub fn init_all(custom_path: Option<&str>) -> AppResult<PathBuf> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            let yaml =
                serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Report required keys missing from a config file on disk.
    pub fn missing_keys(path: impl AsRef<Path>) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path.as_ref())?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let missing = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect();
        Ok(missing)
    }
}
