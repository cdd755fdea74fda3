// models/src/lib.rs
// Shared record types for the hospital registry. Storage lives in the `lib` crate.

pub mod errors;
pub mod medical;

pub use errors::{ValidationError, ValidationResult};
pub use medical::{Hospital, HospitalUpdate, NewHospital};
