// lib/src/storage_engine/sled_storage.rs

use std::fs;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use models::{Hospital, HospitalUpdate, NewHospital};
use sled::transaction::{ConflictableTransactionError, TransactionError, Transactional};
use sled::{Db, Tree};
use uuid::Uuid;

use super::storage_engine::{sort_hospitals, HospitalStorageEngine};
use super::storage_utils::{deserialize_hospital, hospital_key, serialize_hospital};
use crate::config::{StorageConfig, HOSPITALS_TREE, HOSPITAL_PHONES_TREE};
use crate::errors::{HospitalError, Result};

/// Opens (or creates) the sled database under `<data_directory>/sled`.
pub fn open_sled_db(config: &StorageConfig) -> Result<Db> {
    let db_path = config.data_directory.join("sled");

    if !db_path.exists() {
        info!("Creating database directory at {:?}", db_path);
        fs::create_dir_all(&db_path).map_err(|e| {
            error!("Failed to create database directory at {:?}: {}", db_path, e);
            HospitalError::DatabaseError(format!("Failed to create database directory at {:?}: {}", db_path, e))
        })?;
    } else if !db_path.is_dir() {
        error!("Path {:?} exists but is not a directory", db_path);
        return Err(HospitalError::DatabaseError(format!("Path {:?} is not a directory", db_path)));
    }

    info!("Opening Sled database at {:?}", db_path);
    let db = sled::Config::new()
        .path(&db_path)
        .use_compression(config.use_compression)
        .cache_capacity(config.cache_capacity)
        .open()
        .map_err(|e| {
            error!("Failed to open Sled database at {:?}: {}", db_path, e);
            HospitalError::DatabaseError(format!(
                "Failed to open Sled database at {:?}: {}. Ensure the directory is accessible.",
                db_path, e
            ))
        })?;
    info!("Successfully opened Sled database at {:?}", db_path);
    Ok(db)
}

/// Sled-backed implementation of the `HospitalStorageEngine` trait.
///
/// Records live in the `hospitals` tree keyed by the identifier's raw bytes.
/// The `hospital_phones` tree maps each phone number to its owner and is
/// only ever written in the same transaction as the record.
#[derive(Debug)]
pub struct SledStorage {
    db: Db,
    hospitals: Tree,
    phones: Tree,
}

impl SledStorage {
    pub fn new(db: Db) -> Result<Self> {
        let hospitals = db.open_tree(HOSPITALS_TREE)?;
        let phones = db.open_tree(HOSPITAL_PHONES_TREE)?;
        Ok(Self { db, hospitals, phones })
    }

    pub fn open(config: &StorageConfig) -> Result<Self> {
        Self::new(open_sled_db(config)?)
    }
}

fn abort(err: HospitalError) -> ConflictableTransactionError<HospitalError> {
    ConflictableTransactionError::Abort(err)
}

fn from_transaction_error(err: TransactionError<HospitalError>) -> HospitalError {
    match err {
        TransactionError::Abort(e) => e,
        TransactionError::Storage(e) => HospitalError::from(e),
    }
}

#[async_trait]
impl HospitalStorageEngine for SledStorage {
    async fn create_hospital(&self, new_hospital: NewHospital) -> Result<Hospital> {
        let hospital = Hospital::from_new_hospital(new_hospital)?;
        let key = hospital_key(hospital.id());
        let phone = hospital.phone_number.as_bytes();
        let bytes = serialize_hospital(&hospital)?;

        (&self.hospitals, &self.phones)
            .transaction(|(hospitals, phones)| {
                if phones.get(phone)?.is_some() {
                    return Err(abort(HospitalError::duplicate_phone(&hospital.phone_number)));
                }
                hospitals.insert(key, bytes.as_slice())?;
                phones.insert(phone, key)?;
                Ok(())
            })
            .map_err(|e| {
                let err = from_transaction_error(e);
                if err.is_duplicate_key() {
                    warn!("Rejected hospital with duplicate phone number {}", hospital.phone_number);
                }
                err
            })?;

        debug!("Created hospital {} ({})", hospital.id(), hospital);
        Ok(hospital)
    }

    async fn get_hospital(&self, id: &Uuid) -> Result<Option<Hospital>> {
        match self.hospitals.get(hospital_key(id))? {
            Some(bytes) => Ok(Some(deserialize_hospital(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_hospital_by_phone(&self, phone_number: &str) -> Result<Option<Hospital>> {
        let Some(id_bytes) = self.phones.get(phone_number.as_bytes())? else {
            return Ok(None);
        };
        match self.hospitals.get(&id_bytes)? {
            Some(bytes) => Ok(Some(deserialize_hospital(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn update_hospital(&self, id: &Uuid, update: HospitalUpdate) -> Result<Hospital> {
        let key = hospital_key(id);

        let hospital = (&self.hospitals, &self.phones)
            .transaction(|(hospitals, phones)| {
                let Some(bytes) = hospitals.get(key)? else {
                    return Err(abort(HospitalError::NotFound(*id)));
                };
                let mut hospital = deserialize_hospital(&bytes).map_err(abort)?;
                let old_phone = hospital.phone_number.clone();
                hospital
                    .apply_update(update.clone())
                    .map_err(|e| abort(e.into()))?;

                if hospital.phone_number != old_phone {
                    if phones.get(hospital.phone_number.as_bytes())?.is_some() {
                        return Err(abort(HospitalError::duplicate_phone(&hospital.phone_number)));
                    }
                    phones.remove(old_phone.as_bytes())?;
                    phones.insert(hospital.phone_number.as_bytes(), key)?;
                }

                let bytes = serialize_hospital(&hospital).map_err(abort)?;
                hospitals.insert(key, bytes)?;
                Ok(hospital)
            })
            .map_err(|e| {
                let err = from_transaction_error(e);
                if err.is_duplicate_key() {
                    warn!("Rejected update of {}: {}", id, err);
                }
                err
            })?;

        debug!("Updated hospital {}", id);
        Ok(hospital)
    }

    async fn delete_hospital(&self, id: &Uuid) -> Result<bool> {
        let key = hospital_key(id);

        let removed = (&self.hospitals, &self.phones)
            .transaction(|(hospitals, phones)| {
                let Some(bytes) = hospitals.remove(key)? else {
                    return Ok(false);
                };
                let hospital = deserialize_hospital(&bytes).map_err(abort)?;
                phones.remove(hospital.phone_number.as_bytes())?;
                Ok(true)
            })
            .map_err(from_transaction_error)?;

        if removed {
            debug!("Deleted hospital {}", id);
        }
        Ok(removed)
    }

    async fn get_all_hospitals(&self) -> Result<Vec<Hospital>> {
        let mut hospitals = Vec::with_capacity(self.hospitals.len());
        for item in self.hospitals.iter() {
            let (_key, value) = item?;
            hospitals.push(deserialize_hospital(&value)?);
        }
        sort_hospitals(&mut hospitals);
        Ok(hospitals)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.hospitals.len())
    }

    async fn flush(&self) -> Result<()> {
        let bytes = self.db.flush()?;
        info!("Flushed {} bytes to Sled", bytes);
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "Sled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageEngineType;
    use crate::storage_engine::engine_tests;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> StorageConfig {
        StorageConfig {
            storage_engine_type: StorageEngineType::Sled,
            data_directory: dir.path().to_path_buf(),
            ..StorageConfig::default()
        }
    }

    fn temp_storage() -> (TempDir, SledStorage) {
        let dir = TempDir::new().unwrap();
        let storage = SledStorage::open(&test_config(&dir)).unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_create_and_display() {
        let (_dir, storage) = temp_storage();
        engine_tests::create_and_display(&storage).await;
    }

    #[tokio::test]
    async fn test_duplicate_phone_rejected() {
        let (_dir, storage) = temp_storage();
        engine_tests::duplicate_phone_rejected(&storage).await;
    }

    #[tokio::test]
    async fn test_update_rules() {
        let (_dir, storage) = temp_storage();
        engine_tests::update_rules(&storage).await;
    }

    #[tokio::test]
    async fn test_delete_frees_phone() {
        let (_dir, storage) = temp_storage();
        engine_tests::delete_frees_phone(&storage).await;
    }

    #[tokio::test]
    async fn test_listing_order() {
        let (_dir, storage) = temp_storage();
        engine_tests::listing_order(&storage).await;
    }

    #[tokio::test]
    async fn test_invalid_input_stores_nothing() {
        let (_dir, storage) = temp_storage();
        engine_tests::invalid_input_stores_nothing(&storage).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates() {
        let (_dir, storage) = temp_storage();
        let storage = std::sync::Arc::new(storage);
        let mut handles = Vec::new();
        for i in 0..16 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                let mut new = NewHospital::new("+10000000099");
                new.hospital_name = format!("Contender {i}");
                storage.create_hospital(new).await
            }));
        }
        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(e) => assert!(e.is_duplicate_key()),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(storage.count().await.unwrap(), 1);
        assert!(storage.get_hospital_by_phone("+10000000099").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let id = {
            let storage = SledStorage::open(&test_config(&dir)).unwrap();
            let mut new = NewHospital::new("+10000000001");
            new.hospital_name = "City General".to_string();
            let hospital = storage.create_hospital(new).await.unwrap();
            storage.flush().await.unwrap();
            *hospital.id()
        };

        let storage = SledStorage::open(&test_config(&dir)).unwrap();
        let hospital = storage.get_hospital(&id).await.unwrap().unwrap();
        assert_eq!(hospital.to_string(), "City General");
        let err = storage
            .create_hospital(NewHospital::new("+10000000001"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate_key());
    }

    #[test]
    fn test_open_rejects_file_as_data_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sled"), b"not a directory").unwrap();
        let err = SledStorage::open(&test_config(&dir)).unwrap_err();
        assert!(matches!(err, HospitalError::DatabaseError(_)));
    }
}
