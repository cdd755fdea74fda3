// models/src/medical/mod.rs

pub mod hospital;

pub use hospital::{Hospital, HospitalUpdate, NewHospital};
