//! Field-level validation for projects and reviews.
//!
//! Rules are plain functions over candidate attributes. They never touch
//! storage and can be re-run any number of times with the same result.

pub mod field_error;
pub mod rules;
pub mod validation_errors;
