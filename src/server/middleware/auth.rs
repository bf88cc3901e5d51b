use tower_sessions::Session;

use crate::server::{
    data::UserStore,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the identity attached to a request from its session.
///
/// Controllers construct a guard per request and either `require()` a user
/// (401 otherwise) or ask for the `current_user()` where anonymous access is
/// allowed. The resolved user is passed explicitly into service calls; there
/// is no ambient request-identity state.
pub struct AuthGuard<'a> {
    users: &'a dyn UserStore,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(users: &'a dyn UserStore, session: &'a Session) -> Self {
        Self { users, session }
    }

    /// Resolves the session to a user, if any.
    ///
    /// Every failure along the chain — no cookie, expired or revoked session,
    /// vanished user row — resolves to `None` rather than an error, and a
    /// stale session is flushed so the cookie is cleared in the response.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Request is authenticated
    /// - `Ok(None)` - Request proceeds unauthenticated
    /// - `Err(AppError)` - Session store or database failure
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Ok(None);
        };

        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(Some(user)),
            None => {
                auth_session.clear().await?;
                Ok(None)
            }
        }
    }

    /// Resolves the session to a user or fails with `Unauthorized`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(Unauthorized))` - No valid session
    pub async fn require(&self) -> Result<User, AppError> {
        self.current_user()
            .await?
            .ok_or_else(|| AuthError::Unauthorized.into())
    }
}
