// lib/src/storage_engine/storage_utils.rs

use bincode::{
    config::{self, BigEndian, Configuration, Fixint},
    serde::{borrow_decode_from_slice, encode_to_vec},
};
use models::Hospital;
use uuid::Uuid;

use crate::errors::Result;

/// Provides a standard bincode configuration.
pub fn bincode_config() -> Configuration<BigEndian, Fixint> {
    config::standard()
        .with_big_endian()
        .with_fixed_int_encoding()
}

pub fn serialize_hospital(hospital: &Hospital) -> Result<Vec<u8>> {
    Ok(encode_to_vec(hospital, bincode_config())?)
}

pub fn deserialize_hospital(bytes: &[u8]) -> Result<Hospital> {
    let (hospital, _): (Hospital, usize) = borrow_decode_from_slice(bytes, bincode_config())?;
    Ok(hospital)
}

/// Primary key of a record: the 16 raw bytes of its identifier.
pub fn hospital_key(id: &Uuid) -> &[u8] {
    id.as_bytes().as_slice()
}
