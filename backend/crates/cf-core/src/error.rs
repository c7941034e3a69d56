use crate::ValidationErrors;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Wrap a non-empty error set, capturing the caller's location.
    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field-keyed errors carried by this failure.
    pub fn errors(&self) -> &ValidationErrors {
        match self {
            CoreError::Validation { errors, .. } => errors,
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        match self {
            CoreError::Validation { errors, .. } => errors,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
