// lib/src/config/config_constants.rs

pub const DEFAULT_CONFIG_PATH_RELATIVE: &str = "./hospital_config/storage_config.yaml";
pub const DEFAULT_DATA_DIRECTORY: &str = "./hospital_data";
pub const DEFAULT_CACHE_CAPACITY: u64 = 64 * 1024 * 1024;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Sled tree holding `hospital_id -> record`.
pub const HOSPITALS_TREE: &str = "hospitals";
/// Sled tree holding `phone_number -> hospital_id`.
pub const HOSPITAL_PHONES_TREE: &str = "hospital_phones";
