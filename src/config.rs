//! TOML-backed static data and filter persistence.
//!
//! `board.toml` carries the data the engine treats as static:
//!
//! ```toml
//! ratings = [10000, 30000, 60000]
//!
//! [tags]
//! Boss = [1, 2]
//! Anime = [3]
//! ```
//!
//! The filter is stored as its own file so it survives between runs.

use crate::error::ConfigError;
use crate::logic::{RatingThresholds, TagIndex};
use crate::models::FilterState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Static lookup data supplied to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub ratings: RatingThresholds,
    pub tags: TagIndex,
}

impl BoardConfig {
    /// Loads the config, falling back to empty data when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_or_default(path)
    }
}

/// Load a TOML file and deserialize it.
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| {
        log::error!("CONFIG: Failed to parse TOML file {:?}: {}", path, source);
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        log::info!("CONFIG: {:?} not found, using defaults", path);
        return Ok(T::default());
    }
    let value = load_toml(path)?;
    log::info!("CONFIG: Loaded {:?}", path);
    Ok(value)
}

/// Loads a saved filter, or the reset filter when none was saved yet.
pub fn load_filter(path: &Path) -> Result<FilterState, ConfigError> {
    load_or_default(path)
}

pub fn save_filter(path: &Path, filter: &FilterState) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(filter)?;
    log::info!("CONFIG: Saving filter: {}", path.display());
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
