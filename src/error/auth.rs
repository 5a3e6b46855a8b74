use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session, or the stored user no longer exists or was deactivated.
    #[error("User not found in session")]
    UserNotInSession,

    /// User is authenticated but the permission chain rejected the request.
    ///
    /// # Fields
    /// - User id
    /// - Reason, logged but never returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden, reason logged at debug level
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                error_response(StatusCode::FORBIDDEN, "Insufficient permissions")
            }
        }
    }
}
