pub mod currency;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use currency::format_currency;
pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::project_attributes::ProjectAttributes;
pub use models::review::Review;
pub use models::review_attributes::ReviewAttributes;
pub use validation::field_error::FieldError;
pub use validation::rules::{
    DESCRIPTION_MIN_LENGTH, STARS_MAX, STARS_MIN, validate_project, validate_review,
};
pub use validation::validation_errors::ValidationErrors;
