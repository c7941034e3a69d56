//! Axum extractor identifying the signed-in user, if any

use crate::{ApiError, ApiResult, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user acting on this request, or `None` when signed out.
///
/// With JWT verification configured, the user comes from a valid
/// `Authorization: Bearer` token; a token that fails verification rejects the
/// request. Without it, a well-formed `X-User-Id` header is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub Option<Uuid>);

impl ActingUser {
    /// The signed-in user's id, or `AuthenticationRequired`.
    #[track_caller]
    pub fn require(self) -> ApiResult<Uuid> {
        self.0.ok_or_else(|| ApiError::AuthenticationRequired {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(validator) = &state.jwt_validator {
                let Some(header_value) = headers.get(AUTHORIZATION) else {
                    return Ok(ActingUser(None));
                };

                let header_str = header_value.to_str().map_err(|_| ApiError::BadRequest {
                    message: "Authorization header is not valid ASCII".into(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

                let claims = validator.validate_bearer(header_str)?;
                let user_id = claims.user_id()?;
                log::debug!("Authenticated user {} from bearer token", user_id);

                return Ok(ActingUser(Some(user_id)));
            }

            if let Some(header_value) = headers.get(USER_ID_HEADER)
                && let Ok(user_id_str) = header_value.to_str()
            {
                if let Ok(uuid) = Uuid::parse_str(user_id_str) {
                    log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, uuid);
                    return Ok(ActingUser(Some(uuid)));
                }
                log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, user_id_str);
            }

            Ok(ActingUser(None))
        }
    }
}
