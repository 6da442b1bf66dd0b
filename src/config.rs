// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

pub const DEFAULT_GRID_COLUMNS: u16 = 4;
pub const MIN_GRID_COLUMNS: u16 = 1;
pub const MAX_GRID_COLUMNS: u16 = 8;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Window and header title of the gallery.
    pub title: Option<String>,
    /// Directory containing `images.json` and the `images/` folder.
    pub gallery_dir: Option<PathBuf>,
    #[serde(default)]
    pub grid_columns: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            gallery_dir: None,
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
        }
    }
}

/// Keeps persisted column counts inside the supported range so a hand-edited
/// config cannot request a degenerate grid.
pub fn clamp_grid_columns(value: u16) -> u16 {
    value.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
}

/// Repairs out-of-range values in a loaded config. Returns whether anything
/// was changed; callers persist the repaired config so the next start reads
/// clean values.
pub fn sanitize(config: &mut Config) -> bool {
    match config.grid_columns {
        Some(columns) if columns != clamp_grid_columns(columns) => {
            config.grid_columns = Some(clamp_grid_columns(columns));
            true
        }
        _ => false,
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
