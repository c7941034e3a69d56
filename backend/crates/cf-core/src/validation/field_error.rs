use std::fmt;

/// A single constraint violation on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Blank or absent value
    RequiredField,
    TooShort { minimum: usize },
    NotInRange { min: i32, max: i32 },
}

impl FieldError {
    /// Machine-readable kind, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequiredField => "REQUIRED",
            Self::TooShort { .. } => "TOO_SHORT",
            Self::NotInRange { .. } => "NOT_IN_RANGE",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredField => write!(f, "can't be blank"),
            Self::TooShort { minimum } => {
                write!(f, "is too short (minimum is {} characters)", minimum)
            }
            Self::NotInRange { min, max } => write!(f, "must be between {} and {}", min, max),
        }
    }
}
