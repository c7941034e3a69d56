//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use cf_auth::AuthError;
use cf_core::ValidationErrors;
use cf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
    /// The rejected candidate, so a client can re-display its form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

/// Inner error body with code, message, and optional field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-keyed messages for a rejected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// A candidate record failed its validation rules (422)
    #[error("Invalid {entity}: {errors} {location}")]
    InvalidRecord {
        entity: &'static str,
        errors: ValidationErrors,
        record: serde_json::Value,
        location: ErrorLocation,
    },

    /// Operation needs a signed-in user and there is none (401)
    #[error("Authentication required {location}")]
    AuthenticationRequired { location: ErrorLocation },

    /// Credentials were presented but rejected (401)
    #[error("Unauthorized: {source} {location}")]
    Unauthorized {
        source: AuthError,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Reject `candidate` with its validation errors.
    #[track_caller]
    pub fn invalid_record<T: Serialize>(
        entity: &'static str,
        errors: ValidationErrors,
        candidate: &T,
    ) -> Self {
        ApiError::InvalidRecord {
            entity,
            errors,
            record: serde_json::to_value(candidate).unwrap_or(serde_json::Value::Null),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client mistakes are routine; only server faults are errors
        match self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let mut record = None;

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    fields: None,
                },
            ),
            ApiError::InvalidRecord {
                entity,
                errors,
                record: candidate,
                ..
            } => {
                record = Some(candidate);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiErrorBody {
                        code: "VALIDATION_ERROR".into(),
                        message: errors.summary(entity),
                            fields: Some(errors),
                    },
                )
            }
            ApiError::AuthenticationRequired { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "AUTHENTICATION_REQUIRED".into(),
                    message: "You must sign in to do that".into(),
                    fields: None,
                },
            ),
            ApiError::Unauthorized { source, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: source.error_code().into(),
                    message: "Invalid or expired credentials".into(),
                    fields: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    fields: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    fields: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body, record })).into_response()
    }
}

/// Malformed or mistyped request bodies become 400 with the parser's message
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid UUID format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        ApiError::Unauthorized {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
