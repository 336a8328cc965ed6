use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    ///
    /// The client is not logged in or the session expired. Results in 401 Unauthorized.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user ID that no longer exists in the database.
    ///
    /// Results in 401 Unauthorized.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(i32),

    /// Username unknown or password did not match during login.
    ///
    /// Results in 401 Unauthorized. The message does not reveal which part was wrong.
    #[error("Login failed for username '{0}'")]
    InvalidCredentials(String),

    /// Registration attempted with a username that already exists.
    ///
    /// Results in 400 Bad Request.
    #[error("Username '{0}' is already registered")]
    UsernameTaken(String),

    /// User is authenticated but not permitted to perform the action.
    ///
    /// Results in 403 Forbidden.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Reason for the denial, logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `UsernameTaken` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Incorrect username or password")
            }
            Self::UsernameTaken(_) => (StatusCode::BAD_REQUEST, "Username already registered"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
