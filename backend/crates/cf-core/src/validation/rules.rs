use crate::{FieldError, ProjectAttributes, ReviewAttributes, ValidationErrors};

/// Minimum number of characters in a project description
pub const DESCRIPTION_MIN_LENGTH: usize = 25;

pub const STARS_MIN: i32 = 1;
pub const STARS_MAX: i32 = 5;

pub fn validate_project(attributes: &ProjectAttributes) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require("name", &attributes.name, &mut errors);

    if require("description", &attributes.description, &mut errors)
        && attributes.description.chars().count() < DESCRIPTION_MIN_LENGTH
    {
        errors.add(
            "description",
            FieldError::TooShort {
                minimum: DESCRIPTION_MIN_LENGTH,
            },
        );
    }

    require("looking_for", &attributes.looking_for, &mut errors);

    if attributes.target_amount.is_none() {
        errors.add("target_amount", FieldError::RequiredField);
    }

    errors
}

pub fn validate_review(attributes: &ReviewAttributes) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require("name", &attributes.name, &mut errors);

    match attributes.stars {
        None => errors.add("stars", FieldError::RequiredField),
        Some(stars) if !(STARS_MIN..=STARS_MAX).contains(&stars) => errors.add(
            "stars",
            FieldError::NotInRange {
                min: STARS_MIN,
                max: STARS_MAX,
            },
        ),
        Some(_) => {}
    }

    errors
}

/// Records `RequiredField` for a blank value. Returns whether the value was present.
fn require(field: &'static str, value: &str, errors: &mut ValidationErrors) -> bool {
    if value.trim().is_empty() {
        errors.add(field, FieldError::RequiredField);
        false
    } else {
        true
    }
}
