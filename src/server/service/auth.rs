//! OAuth2 login with Discord.

use oauth2::{basic::BasicTokenResponse, AuthorizationCode, CsrfToken, Scope, TokenResponse};
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::UserStore,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParams, User},
    state::{AppState, OAuth2Client},
};

/// The subset of the Discord profile response this service reads.
#[derive(Debug, Deserialize)]
struct DiscordProfile {
    id: String,
    username: String,
    /// Avatar hash; `None` when the account uses a default avatar.
    avatar: Option<String>,
}

/// Orchestrates the Discord OAuth2 flow: login URL generation, authorization
/// code exchange, profile fetch, and the user upsert.
pub struct DiscordAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    users: &'a dyn UserStore,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            http_client: &state.http_client,
            oauth_client: &state.oauth_client,
            users: state.users.as_ref(),
        }
    }

    /// Builds the Discord authorize URL together with a fresh CSRF token.
    ///
    /// The caller stores the token in the session and validates it during the
    /// callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the OAuth flow for an authorization code.
    ///
    /// Exchanges the code for an access token, fetches the Discord profile,
    /// and upserts the user record so the name and avatar refresh on every
    /// login.
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_discord_profile(&token).await?;

        let avatar = profile.avatar.map(|hash| {
            format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                profile.id, hash
            )
        });

        let user = self
            .users
            .upsert(UpsertUserParams {
                discord_id: profile.id,
                username: profile.username,
                avatar,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves the Discord profile using the provided access token.
    async fn fetch_discord_profile(
        &self,
        token: &BasicTokenResponse,
    ) -> Result<DiscordProfile, AppError> {
        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordProfile>()
            .await?;

        Ok(profile)
    }
}
