use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::DisplayMode;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TradeValueCalculator";
const APP_NAME: &str = "TradeValueCalculator";
const CONFIG_FILENAME: &str = "config.json";

/// User settings edited on the settings page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL serving `ftf_items.json` and `shg_exceptions.json`.
    /// The bundled catalog is used when unset.
    #[serde(default)]
    pub catalog_url: Option<String>,
    /// Unit the trade page starts in.
    #[serde(default)]
    pub default_mode: DisplayMode,
}

impl AppConfig {
    /// Configured catalog URL, ignoring blank input.
    pub fn catalog_url(&self) -> Option<&str> {
        self.catalog_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads the config file; a missing or unreadable file yields defaults.
pub fn load_config() -> AppConfig {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("no config directory available; using defaults");
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), %err, "config not readable; using defaults");
            return AppConfig::default();
        }
    };
    serde_json::from_str(&data).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "invalid config; using defaults");
        AppConfig::default()
    })
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigSaveError> {
    let path = config_file().ok_or(ConfigSaveError::StorageUnavailable)?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigSaveError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
