//! Validation utilities.

use crate::MapxError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MapxError` on failure.
    fn validate_request(&self) -> Result<(), MapxError> {
        self.validate().map_err(validation_errors_to_mapx_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `MapxError`.
#[must_use]
pub fn validation_errors_to_mapx_error(errors: ValidationErrors) -> MapxError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    MapxError::Validation(message)
}
