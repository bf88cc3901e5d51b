//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod data;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, data::DataError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unmappable stored data: unrecognized enum value or undecodable blob.
    ///
    /// The stored row predates the current schema or was corrupted. Results in
    /// 500 Internal Server Error; the stored value is logged server-side and
    /// never leaked to the client.
    #[error(transparent)]
    DataErr(#[from] DataError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session store backend error.
    #[error(transparent)]
    SessionStoreErr(#[from] tower_sessions::session_store::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind/accept error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message. Unknown
    /// identifiers signal this before any ownership check runs.
    #[error("{0}")]
    NotFound(String),

    /// Access denied on an existing resource.
    ///
    /// Results in 403 Forbidden. Only signaled after existence is confirmed;
    /// unknown ids are `NotFound` instead.
    #[error("{0}")]
    Forbidden(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, DataErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors
/// that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
