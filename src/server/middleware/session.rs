//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing the two concerns the
//! application keeps in its sessions: the authenticated user and the CSRF
//! token for the OAuth flow. Each struct wraps the same underlying `Session`
//! but exposes only the methods relevant to its concern, preventing key typos
//! and centralizing session-related logic.

use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};
use uuid::Uuid;

use crate::server::{error::AppError, model::user::User};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_DISCORD_ID: &str = "auth:discord_id";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Fixed session lifetime, counted from login.
///
/// Sessions are never extended by activity; only re-authentication starts a
/// fresh 72-hour window. Expiry is enforced by the session store on every
/// load, independent of the background sweep.
pub const SESSION_LIFETIME: Duration = Duration::hours(72);

/// Authentication session management.
///
/// Handles the authenticated user's identity and the session lifecycle.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for `user`.
    ///
    /// Stores the user's id and Discord id and pins the session expiry to a
    /// fixed point 72 hours from now.
    ///
    /// # Returns
    /// - `Ok(())` - Session established
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn sign_in(&self, user: &User) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user.id).await?;
        self.session
            .insert(SESSION_AUTH_DISCORD_ID, user.discord_id.clone())
            .await?;
        self.session.set_expiry(Some(Expiry::AtDateTime(
            OffsetDateTime::now_utc() + SESSION_LIFETIME,
        )));
        Ok(())
    }

    /// Retrieves the logged-in user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in, or session expired)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<Uuid>, AppError> {
        let user_id = self.session.get::<Uuid>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Destroys the session and clears the cookie in the response.
    ///
    /// Used on logout and when a session turns out to be stale (its user row
    /// is gone).
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth
/// callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token for later callback validation.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
