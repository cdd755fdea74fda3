// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub use crate::config::config_constants::*;
use crate::config::config_structs::StorageEngineType;

pub fn default_storage_engine_type() -> StorageEngineType { StorageEngineType::Sled }
pub fn default_data_directory() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIRECTORY) }
pub fn default_cache_capacity() -> u64 { DEFAULT_CACHE_CAPACITY }
pub fn default_use_compression() -> bool { false }
pub fn default_log_level() -> String { DEFAULT_LOG_LEVEL.to_string() }

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH_RELATIVE)
}
