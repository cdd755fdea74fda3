// lib/src/config/config_helpers.rs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use serde_yaml2 as serde_yaml;

use crate::config::config_defaults::default_config_path;
use crate::config::config_structs::{StorageConfig, StorageConfigWrapper};
use crate::errors::{HospitalError, Result};

/// Where a loaded `StorageConfig` came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// No file existed at this path, so the defaults were used.
    Defaults(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "Loaded storage config from {}", path.display()),
            ConfigOrigin::Defaults(path) => write!(
                f,
                "Config file not found at {}. Using default storage config.",
                path.display()
            ),
        }
    }
}

/// Reads the storage configuration without logging, returning it together
/// with its origin. Callers that set up logging from the result report the
/// origin once the logger exists.
pub fn read_storage_config(config_file_path: Option<&Path>) -> Result<(StorageConfig, ConfigOrigin)> {
    let path_to_use = config_file_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if !path_to_use.exists() {
        return Ok((StorageConfig::default(), ConfigOrigin::Defaults(path_to_use)));
    }

    let config_content = fs::read_to_string(&path_to_use).map_err(|e| {
        HospitalError::ConfigurationError(format!(
            "Failed to read storage config file {}: {}",
            path_to_use.display(),
            e
        ))
    })?;

    let wrapper: StorageConfigWrapper = serde_yaml::from_str(&config_content).map_err(|e| {
        HospitalError::ConfigurationError(format!(
            "Failed to parse storage config YAML {}: {}",
            path_to_use.display(),
            e
        ))
    })?;
    Ok((wrapper.storage, ConfigOrigin::File(path_to_use)))
}

/// Loads the storage configuration from `config_file_path`, or from the
/// default location when no path is given.
///
/// A missing file is not an error: the defaults are returned instead.
pub fn load_storage_config(config_file_path: Option<&Path>) -> Result<StorageConfig> {
    match read_storage_config(config_file_path) {
        Ok((config, origin)) => {
            match &origin {
                ConfigOrigin::File(_) => info!("{}", origin),
                ConfigOrigin::Defaults(_) => warn!("{}", origin),
            }
            debug!("Storage config: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}

/// Writes `config` as YAML, creating parent directories as needed.
pub fn save_storage_config(config: &StorageConfig, config_file_path: Option<&Path>) -> Result<()> {
    let config_path = config_file_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    let wrapper = StorageConfigWrapper { storage: config.clone() };
    let yaml_string = serde_yaml::to_string(&wrapper).map_err(|e| {
        HospitalError::ConfigurationError(format!("Failed to serialize storage config to YAML: {}", e))
    })?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, yaml_string)?;
    info!("Saved storage config to {:?}", config_path);
    Ok(())
}
