// lib/src/lib.rs
// Storage layer for hospital records. Record types come from the `models` crate.

pub mod config;
pub mod errors;
pub mod storage_engine;

pub use models::{Hospital, HospitalUpdate, NewHospital};

pub use crate::config::{
    load_storage_config, read_storage_config, save_storage_config, ConfigOrigin, StorageConfig, StorageEngineType,
};
pub use crate::errors::*;
pub use crate::storage_engine::{create_storage, HospitalStorageEngine, InMemoryStorage, SledStorage, open_sled_db};
