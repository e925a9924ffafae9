//! Persisted application configuration.
//!
//! Settings live in a TOML file under the `.pointmap` application directory.
//! Loading tolerates a missing file by falling back to defaults; the first
//! save writes the file so later launches start from something editable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Number of points generated when no configuration exists.
pub const DEFAULT_POINT_COUNT: usize = 10_000;

/// App settings loaded from and saved to the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How many points to generate at startup.
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    /// Optional RNG seed for a reproducible point layout.
    #[serde(default)]
    pub point_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            point_seed: None,
        }
    }
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to resolve or create the application directory.
    #[error("Failed to prepare config directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file contained invalid TOML.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Failed to serialize the configuration to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(toml::ser::Error),
    /// Failed to write the config file.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration, writing defaults on first launch.
pub fn load_or_init() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        save_to(&config, &path)?;
        return Ok(config);
    }
    load_from(&path)
}

/// Persist the configuration to the default location.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to(config, &path)
}

fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the TOML file via a sibling temp file so a crash never leaves a
/// half-written config behind.
fn save_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let raw = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, raw).map_err(|source| ConfigError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = AppConfig {
            point_count: 1234,
            point_seed: Some(42),
        };
        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "point_count = 50\n").unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.point_count, 50);
        assert_eq!(loaded.point_seed, None);
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "point_count = \"ten thousand\"\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        save_to(&AppConfig::default(), &path).unwrap();
        assert!(path.is_file());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
