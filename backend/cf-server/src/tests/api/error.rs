use crate::ApiError;

use cf_auth::AuthError;
use cf_core::{FieldError, ProjectAttributes, ValidationErrors};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found("Project 42 not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project 42 not found");
    assert!(json.get("record").is_none());
}

#[tokio::test]
async fn test_bad_request_returns_400_without_field_details() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_invalid_record_returns_422_with_fields_and_candidate() {
    let candidate = ProjectAttributes {
        name: "Solar Kiosk".into(),
        description: "too short".into(),
        ..Default::default()
    };
    let mut errors = ValidationErrors::new();
    errors.add("description", FieldError::TooShort { minimum: 25 });
    errors.add("looking_for", FieldError::RequiredField);

    let response = ApiError::invalid_record("project", errors, &candidate).into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"]["message"],
        "2 errors prohibited this project from being saved"
    );
    assert_eq!(
        json["error"]["fields"]["description"][0],
        "is too short (minimum is 25 characters)"
    );
    assert_eq!(json["error"]["fields"]["looking_for"][0], "can't be blank");
    assert_eq!(json["record"]["name"], "Solar Kiosk");
    assert_eq!(json["record"]["description"], "too short");
}

#[tokio::test]
async fn test_authentication_required_returns_401() {
    let error = ApiError::AuthenticationRequired {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "AUTHENTICATION_REQUIRED");
}

#[tokio::test]
async fn test_rejected_token_returns_401_with_auth_code() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_bad_request() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert_that!(
        matches!(api_err, ApiError::BadRequest { .. }),
        eq(true)
    );
    assert_that!(api_err.to_string(), contains_substring("Invalid UUID format"));
}

#[test]
fn test_row_not_found_converts_to_not_found() {
    let db_err = cf_db::DbError::from(sqlx::Error::RowNotFound);
    let api_err: ApiError = db_err.into();

    assert_that!(matches!(api_err, ApiError::NotFound { .. }), eq(true));
}

#[test]
fn test_other_database_errors_hide_details() {
    let db_err = cf_db::DbError::from(sqlx::Error::PoolTimedOut);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_that!(message, eq("Database operation failed"))
        }
        other => panic!("expected Internal, got {other:?}"),
    }
}
