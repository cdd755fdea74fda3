// models/src/medical/hospital.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_length, check_required, ValidationResult};

/// Maximum length, in characters, of `hospital_name`.
pub const HOSPITAL_NAME_MAX_LENGTH: usize = 100;
/// Maximum length, in characters, of `phone_number`.
pub const PHONE_NUMBER_MAX_LENGTH: usize = 15;

// --- DTO for registering a new hospital ---
// Every field except the phone number falls back to its declared default
// when absent from the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewHospital {
    pub hospital_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
    pub emergency: bool,
    pub general_beds: i32,
    pub icu_beds: i32,
    pub private_beds: i32,
}

impl NewHospital {
    /// Creates a registration request carrying only the required phone number.
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }
}

/// A partial update. `None` leaves the stored value as it is.
///
/// The identifier has no counterpart here: it never changes after creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalUpdate {
    pub hospital_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: Option<String>,
    pub emergency: Option<bool>,
    pub general_beds: Option<i32>,
    pub icu_beds: Option<i32>,
    pub private_beds: Option<i32>,
}

impl HospitalUpdate {
    /// Returns `true` if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// --- Stored Hospital ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    hospital_id: Uuid,
    pub hospital_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
    pub emergency: bool,
    pub general_beds: i32,
    pub icu_beds: i32,
    pub private_beds: i32,
}

impl Hospital {
    /// Human-readable labels for each persisted field, in declaration order.
    pub const FIELD_LABELS: [(&'static str, &'static str); 9] = [
        ("hospital_id", "Hospital ID"),
        ("hospital_name", "Hospital Name"),
        ("latitude", "Latitude"),
        ("longitude", "Longitude"),
        ("phone_number", "Phone Number"),
        ("emergency", "Emergency Available"),
        ("general_beds", "General Beds"),
        ("icu_beds", "ICU Beds"),
        ("private_beds", "Private Beds"),
    ];

    /// Creates a new `Hospital` from a `NewHospital` DTO, assigning a fresh identifier.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the name or phone number is too long,
    /// or if the phone number is blank.
    pub fn from_new_hospital(new_hospital: NewHospital) -> ValidationResult<Self> {
        let hospital = Hospital {
            hospital_id: Uuid::new_v4(),
            hospital_name: new_hospital.hospital_name,
            latitude: new_hospital.latitude,
            longitude: new_hospital.longitude,
            phone_number: new_hospital.phone_number,
            emergency: new_hospital.emergency,
            general_beds: new_hospital.general_beds,
            icu_beds: new_hospital.icu_beds,
            private_beds: new_hospital.private_beds,
        };
        hospital.validate()?;
        Ok(hospital)
    }

    /// Returns the identifier assigned at creation.
    pub fn id(&self) -> &Uuid {
        &self.hospital_id
    }

    /// Checks the field-level constraints. Coordinates and bed counts are
    /// accepted as given.
    pub fn validate(&self) -> ValidationResult<()> {
        check_max_length("hospital_name", &self.hospital_name, HOSPITAL_NAME_MAX_LENGTH)?;
        check_required("phone_number", &self.phone_number)?;
        check_max_length("phone_number", &self.phone_number, PHONE_NUMBER_MAX_LENGTH)?;
        Ok(())
    }

    /// Applies `update` in place. On a validation failure `self` is left unchanged.
    pub fn apply_update(&mut self, update: HospitalUpdate) -> ValidationResult<()> {
        let mut patched = self.clone();
        if let Some(name) = update.hospital_name {
            patched.hospital_name = name;
        }
        if let Some(latitude) = update.latitude {
            patched.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            patched.longitude = longitude;
        }
        if let Some(phone) = update.phone_number {
            patched.phone_number = phone;
        }
        if let Some(emergency) = update.emergency {
            patched.emergency = emergency;
        }
        if let Some(beds) = update.general_beds {
            patched.general_beds = beds;
        }
        if let Some(beds) = update.icu_beds {
            patched.icu_beds = beds;
        }
        if let Some(beds) = update.private_beds {
            patched.private_beds = beds;
        }
        patched.validate()?;
        *self = patched;
        Ok(())
    }

    /// Sum of general, ICU and private beds.
    pub fn total_beds(&self) -> i64 {
        i64::from(self.general_beds) + i64::from(self.icu_beds) + i64::from(self.private_beds)
    }
}

impl fmt::Display for Hospital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hospital_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn city_general() -> NewHospital {
        NewHospital {
            hospital_name: "City General".to_string(),
            phone_number: "+10000000001".to_string(),
            emergency: true,
            general_beds: 50,
            icu_beds: 5,
            private_beds: 10,
            ..NewHospital::default()
        }
    }

    #[test]
    fn test_display_is_name() {
        let hospital = Hospital::from_new_hospital(city_general()).unwrap();
        assert_eq!(hospital.to_string(), "City General");
        assert_eq!(hospital.total_beds(), 65);
    }

    #[test]
    fn test_display_of_empty_name() {
        let hospital = Hospital::from_new_hospital(NewHospital::new("+10000000002")).unwrap();
        assert_eq!(hospital.to_string(), "");
    }

    #[test]
    fn test_defaults() {
        let hospital = Hospital::from_new_hospital(NewHospital::new("+10000000003")).unwrap();
        assert_eq!(hospital.latitude, 0.0);
        assert_eq!(hospital.longitude, 0.0);
        assert_eq!(hospital.general_beds, 0);
        assert_eq!(hospital.icu_beds, 0);
        assert_eq!(hospital.private_beds, 0);
        assert!(!hospital.emergency);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let new: NewHospital = serde_json::from_str(r#"{"phone_number": "+15550000"}"#).unwrap();
        assert_eq!(new, NewHospital::new("+15550000"));
    }

    #[test]
    fn test_fresh_identifiers() {
        let a = Hospital::from_new_hospital(city_general()).unwrap();
        let b = Hospital::from_new_hospital(city_general()).unwrap();
        assert!(!a.id().is_nil());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_field_constraints() {
        let err = Hospital::from_new_hospital(NewHospital::new("")).unwrap_err();
        assert_eq!(err, ValidationError::RequiredField("phone_number"));

        let err = Hospital::from_new_hospital(NewHospital::new("+1234567890123456")).unwrap_err();
        assert_eq!(err, ValidationError::FieldTooLong { field: "phone_number", max: 15, actual: 17 });

        let mut new = NewHospital::new("+1");
        new.hospital_name = "x".repeat(101);
        assert!(matches!(
            Hospital::from_new_hospital(new),
            Err(ValidationError::FieldTooLong { field: "hospital_name", .. })
        ));
    }

    #[test]
    fn test_unconstrained_numbers_are_accepted() {
        let mut new = NewHospital::new("+1");
        new.latitude = 123.0;
        new.longitude = -500.0;
        new.icu_beds = -3;
        let hospital = Hospital::from_new_hospital(new).unwrap();
        assert_eq!(hospital.icu_beds, -3);
        assert_eq!(hospital.latitude, 123.0);
    }

    #[test]
    fn test_apply_update_keeps_id() {
        let mut hospital = Hospital::from_new_hospital(city_general()).unwrap();
        let id = *hospital.id();
        hospital
            .apply_update(HospitalUpdate {
                hospital_name: Some("City General East".to_string()),
                icu_beds: Some(8),
                ..HospitalUpdate::default()
            })
            .unwrap();
        assert_eq!(*hospital.id(), id);
        assert_eq!(hospital.to_string(), "City General East");
        assert_eq!(hospital.icu_beds, 8);
        assert_eq!(hospital.general_beds, 50);
    }

    #[test]
    fn test_failed_update_leaves_record_untouched() {
        let mut hospital = Hospital::from_new_hospital(city_general()).unwrap();
        let before = hospital.clone();
        let result = hospital.apply_update(HospitalUpdate {
            hospital_name: Some("Renamed".to_string()),
            phone_number: Some(String::new()),
            ..HospitalUpdate::default()
        });
        assert!(result.is_err());
        assert_eq!(hospital, before);
    }

    #[test]
    fn test_persisted_field_names() {
        let hospital = Hospital::from_new_hospital(city_general()).unwrap();
        let json = serde_json::to_value(&hospital).unwrap();
        let object = json.as_object().unwrap();
        for (field, _) in Hospital::FIELD_LABELS {
            assert!(object.contains_key(field), "missing {field}");
        }
        assert_eq!(object.len(), Hospital::FIELD_LABELS.len());
    }
}
