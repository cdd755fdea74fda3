// models/src/errors.rs

pub use thiserror::Error;

/// A field-level validation error raised while building or patching a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or contained only whitespace.
    #[error("field '{0}' is required")]
    RequiredField(&'static str),
    /// A text field exceeded its declared maximum length.
    #[error("field '{field}' is {actual} characters long, maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that `value` holds at most `max` characters.
pub(crate) fn check_max_length(field: &'static str, value: &str, max: usize) -> ValidationResult<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

/// Checks that `value` is not blank.
pub(crate) fn check_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField(field));
    }
    Ok(())
}
