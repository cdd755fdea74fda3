// lib/src/config/mod.rs

pub mod config_constants;
pub mod config_defaults;
pub mod config_helpers;
pub mod config_serializers;
pub mod config_structs;

pub use config_constants::*;
pub use config_helpers::{load_storage_config, read_storage_config, save_storage_config, ConfigOrigin};
pub use config_structs::{StorageConfig, StorageConfigWrapper, StorageEngineType};
