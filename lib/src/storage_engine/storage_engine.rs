// lib/src/storage_engine/storage_engine.rs

use async_trait::async_trait;
use models::{Hospital, HospitalUpdate, NewHospital};
use uuid::Uuid;

use crate::errors::Result;

/// Persistence for hospital records.
///
/// Implementations enforce both uniqueness constraints: the identifier is
/// the primary key, and no two stored records share a `phone_number`.
/// The uniqueness check and the write it guards must be atomic.
#[async_trait]
pub trait HospitalStorageEngine: Send + Sync + 'static {
    /// Validates `new_hospital`, assigns an identifier and stores the record.
    ///
    /// # Errors
    /// `HospitalError::DuplicateKey` if the phone number is already registered,
    /// `HospitalError::Validation` if a field-level constraint is violated.
    async fn create_hospital(&self, new_hospital: NewHospital) -> Result<Hospital>;
    /// Retrieves a hospital by its identifier.
    async fn get_hospital(&self, id: &Uuid) -> Result<Option<Hospital>>;
    /// Retrieves a hospital by its phone number.
    async fn get_hospital_by_phone(&self, phone_number: &str) -> Result<Option<Hospital>>;
    /// Applies `update` to the stored record and returns the new state.
    /// A failed update leaves the stored record unchanged.
    async fn update_hospital(&self, id: &Uuid, update: HospitalUpdate) -> Result<Hospital>;
    /// Deletes a hospital. Returns `false` if no record had this identifier.
    async fn delete_hospital(&self, id: &Uuid) -> Result<bool>;
    /// All records, ordered by name and then identifier.
    async fn get_all_hospitals(&self) -> Result<Vec<Hospital>>;
    async fn count(&self) -> Result<usize>;
    async fn flush(&self) -> Result<()>;
    fn get_type(&self) -> &'static str;
}

/// Orders records by name, breaking ties by identifier.
pub(crate) fn sort_hospitals(hospitals: &mut [Hospital]) {
    hospitals.sort_by(|a, b| {
        a.hospital_name
            .cmp(&b.hospital_name)
            .then_with(|| a.id().cmp(b.id()))
    });
}
