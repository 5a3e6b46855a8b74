//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by handlers, services and repositories. It
//! wraps the domain-specific errors and implements `IntoResponse`, so every failure leaves the
//! server through the same translation into a status code and an `ErrorDto` body.

pub mod auth;
pub mod config;
pub mod internal;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, internal::InternalError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Client errors carry the message returned to the caller. Everything else is logged and
/// reported as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure.
    ///
    /// Delegates to `AuthError::into_response()` for the 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Programming error detected at runtime.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations are translated by the `From<DbErr>` impl below, so this variant
    /// only holds failures the client cannot fix.
    #[error(transparent)]
    DbErr(sea_orm::DbErr),

    /// SQLx driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failed to serialize a response body.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),

    /// Socket or filesystem error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or invalid input.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Requested resource does not exist or was deleted.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// The request collides with existing data (duplicate natural key, active dependents).
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

/// Maps storage constraint violations that slipped past the service checks onto the client
/// error taxonomy.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violation: {}", detail);
                AppError::Conflict("Resource already exists".to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!("Foreign key constraint violation: {}", detail);
                AppError::Validation("Referenced resource does not exist".to_string())
            }
            _ => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For every other variant, with details logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a response with the uniform error body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(status, message))).into_response()
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged, the client only sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Response for a panic caught by `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
