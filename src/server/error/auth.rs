use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no identity header.
    ///
    /// The upstream gateway did not authenticate the caller. Results in a
    /// 401 Unauthorized response.
    #[error("Request is missing the identity header")]
    MissingIdentity,

    /// The identity header is not a valid user ID.
    #[error("Identity header value '{0}' is not a valid user ID")]
    InvalidIdentity(String),

    /// The asserted user does not exist in the database.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but does not own the resource.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingIdentity` / `InvalidIdentity` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::InvalidIdentity(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have access to this resource".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
