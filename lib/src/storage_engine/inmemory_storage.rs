// lib/src/storage_engine/inmemory_storage.rs

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, warn};
use models::{Hospital, HospitalUpdate, NewHospital};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::storage_engine::{sort_hospitals, HospitalStorageEngine};
use crate::errors::{HospitalError, Result};

#[derive(Debug, Default)]
struct InMemoryState {
    hospitals: HashMap<Uuid, Hospital>,
    // phone_number -> hospital_id
    phones: HashMap<String, Uuid>,
}

/// Non-persistent engine for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: RwLock<InMemoryState>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HospitalStorageEngine for InMemoryStorage {
    async fn create_hospital(&self, new_hospital: NewHospital) -> Result<Hospital> {
        let hospital = Hospital::from_new_hospital(new_hospital)?;

        let mut state = self.state.write().await;
        if state.phones.contains_key(&hospital.phone_number) {
            warn!("Rejected hospital with duplicate phone number {}", hospital.phone_number);
            return Err(HospitalError::duplicate_phone(&hospital.phone_number));
        }
        state.phones.insert(hospital.phone_number.clone(), *hospital.id());
        state.hospitals.insert(*hospital.id(), hospital.clone());
        debug!("Created hospital {} ({})", hospital.id(), hospital);
        Ok(hospital)
    }

    async fn get_hospital(&self, id: &Uuid) -> Result<Option<Hospital>> {
        let state = self.state.read().await;
        Ok(state.hospitals.get(id).cloned())
    }

    async fn get_hospital_by_phone(&self, phone_number: &str) -> Result<Option<Hospital>> {
        let state = self.state.read().await;
        Ok(state
            .phones
            .get(phone_number)
            .and_then(|id| state.hospitals.get(id))
            .cloned())
    }

    async fn update_hospital(&self, id: &Uuid, update: HospitalUpdate) -> Result<Hospital> {
        let mut state = self.state.write().await;
        let mut hospital = state.hospitals.get(id).cloned().ok_or(HospitalError::NotFound(*id))?;
        let old_phone = hospital.phone_number.clone();
        hospital.apply_update(update)?;

        if hospital.phone_number != old_phone {
            if state.phones.contains_key(&hospital.phone_number) {
                warn!("Rejected update of {}: phone number {} is taken", id, hospital.phone_number);
                return Err(HospitalError::duplicate_phone(&hospital.phone_number));
            }
            state.phones.remove(&old_phone);
            state.phones.insert(hospital.phone_number.clone(), *id);
        }
        state.hospitals.insert(*id, hospital.clone());
        debug!("Updated hospital {}", id);
        Ok(hospital)
    }

    async fn delete_hospital(&self, id: &Uuid) -> Result<bool> {
        let mut state = self.state.write().await;
        match state.hospitals.remove(id) {
            Some(hospital) => {
                state.phones.remove(&hospital.phone_number);
                debug!("Deleted hospital {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_all_hospitals(&self) -> Result<Vec<Hospital>> {
        let state = self.state.read().await;
        let mut hospitals: Vec<Hospital> = state.hospitals.values().cloned().collect();
        sort_hospitals(&mut hospitals);
        Ok(hospitals)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.state.read().await.hospitals.len())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "InMemory"
    }
}
