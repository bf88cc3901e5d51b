use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No valid session on a route that requires authentication.
    ///
    /// The request carried no session cookie, the session expired or was
    /// revoked, or the session's user no longer exists. Results in a 401
    /// Unauthorized response.
    #[error("No authenticated user in session")]
    Unauthorized,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth authorization code could not be exchanged for a token.
    ///
    /// Discord rejected the code or the token endpoint was unreachable.
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid information leakage; the full
/// error is logged where it is raised.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(msg) => {
                tracing::error!("OAuth token exchange failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
