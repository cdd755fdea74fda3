// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;
pub mod sled_storage;
pub mod storage_engine;
pub mod storage_utils;


pub use inmemory_storage::InMemoryStorage;
pub use sled_storage::{open_sled_db, SledStorage};
pub use storage_engine::HospitalStorageEngine;

use std::sync::Arc;

use log::info;

use crate::config::{StorageConfig, StorageEngineType};
use crate::errors::Result;

/// Creates a storage engine instance based on the provided configuration.
pub fn create_storage(config: &StorageConfig) -> Result<Arc<dyn HospitalStorageEngine>> {
    let storage: Arc<dyn HospitalStorageEngine> = match config.storage_engine_type {
        StorageEngineType::Sled => Arc::new(SledStorage::open(config)?),
        StorageEngineType::InMemory => Arc::new(InMemoryStorage::new()),
    };
    info!("Using {} storage engine", storage.get_type());
    Ok(storage)
}
