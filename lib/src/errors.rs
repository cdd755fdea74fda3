// lib/src/errors.rs

use bincode::error::{DecodeError, EncodeError};
use models::errors::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum HospitalError {
    /// A write would give two records the same value for a unique field.
    #[error("Duplicate key: {field} '{value}' is already taken")]
    DuplicateKey { field: &'static str, value: String },

    #[error("Not Found: hospital {0}")]
    NotFound(Uuid),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Bincode decode error: {0}")]
    BincodeDecode(#[from] DecodeError),
    #[error("Bincode encode error: {0}")]
    BincodeEncode(#[from] EncodeError),
}

impl HospitalError {
    /// Builds the error raised when `phone_number` is already registered.
    pub fn duplicate_phone(phone_number: &str) -> Self {
        HospitalError::DuplicateKey {
            field: "phone_number",
            value: phone_number.to_string(),
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, HospitalError::DuplicateKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, HospitalError>;

impl From<sled::Error> for HospitalError {
    fn from(err: sled::Error) -> Self {
        HospitalError::DatabaseError(err.to_string())
    }
}
