// lib/src/config/config_structs.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::{error, trace};
use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::config::config_serializers::storage_engine_type_serde;
use crate::errors::HospitalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEngineType {
    Sled,
    InMemory,
}

impl FromStr for StorageEngineType {
    type Err = HospitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!("Parsing storage engine type: {}", s);
        match s.to_lowercase().as_str() {
            "sled" => Ok(StorageEngineType::Sled),
            "inmemory" | "in_memory" | "in-memory" => Ok(StorageEngineType::InMemory),
            _ => {
                error!("Unknown storage engine type: {}", s);
                Err(HospitalError::ConfigurationError(format!("Unknown storage engine type: {}", s)))
            }
        }
    }
}

impl fmt::Display for StorageEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageEngineType::Sled => write!(f, "sled"),
            StorageEngineType::InMemory => write!(f, "in_memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_engine_type", with = "storage_engine_type_serde")]
    pub storage_engine_type: StorageEngineType,
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    #[serde(default = "default_use_compression")]
    pub use_compression: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            storage_engine_type: default_storage_engine_type(),
            data_directory: default_data_directory(),
            cache_capacity: default_cache_capacity(),
            use_compression: default_use_compression(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Storage Configuration ==")?;
        writeln!(f, "  Storage Engine Type: {}", self.storage_engine_type)?;
        writeln!(f, "  Data Directory: {}", self.data_directory.display())?;
        writeln!(f, "  Cache Capacity: {} bytes", self.cache_capacity)?;
        writeln!(f, "  Use Compression: {}", self.use_compression)?;
        write!(f, "  Log Level: {}", self.log_level)
    }
}

/// Top-level `storage:` key of the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfigWrapper {
    pub storage: StorageConfig,
}
