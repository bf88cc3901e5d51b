use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// Start the Discord OAuth login flow.
///
/// Generates the Discord authorize URL, stores a CSRF token in the session
/// for callback validation, and redirects the browser to Discord.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Discord authorize URL"),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// Complete the Discord OAuth login flow.
///
/// Validates the CSRF state, exchanges the authorization code, fetches the
/// Discord profile, upserts the user, establishes a logged-in session with a
/// fixed 72-hour expiry, and redirects into the app.
///
/// # Returns
/// - `307 Temporary Redirect` - Login succeeded, session cookie set
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Token exchange or profile fetch failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Discord authorization code")
    ),
    responses(
        (status = 307, description = "Redirect into the application"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let auth_service = DiscordAuthService::new(&state);
    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).sign_in(&user).await?;

    Ok(Redirect::temporary(&format!(
        "{}/my/monsters",
        state.app_url
    )))
}

/// Log out and destroy the session.
///
/// The session row is deleted and the cookie is cleared via a negative
/// max-age in the response.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the landing page"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::to("/"))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.users.as_ref(), &session)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from_user(user))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
