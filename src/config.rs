use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub trim_status: bool,
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    /// Load config from `explicit` if given, otherwise from the first
    /// well-known location that parses. An explicit path must exist and parse.
    pub fn load(explicit: Option<&Path>, quiet: bool) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => {
                    if !quiet {
                        eprintln!("Loaded config from {}", path.display());
                    }
                    return Ok(config);
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: {e}");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Config>(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/formatutils/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("formatutils").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("formatutils").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.formatutils.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".formatutils.toml"));
        }

        paths
    }
}
