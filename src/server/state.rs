//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! the database connection is a pool handle, `reqwest::Client` and the store
//! handles are `Arc`s, and the OAuth client is designed to be cloned.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::data::{
    collection::CollectionRepository, family::FamilyRepository, monster::MonsterRepository,
    user::UserRepository, CollectionStore, FamilyStore, MonsterStore, UserStore,
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for external API requests (Discord profile fetches).
    ///
    /// Configured with redirects disabled to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Application base URL for post-login redirects.
    pub app_url: String,

    /// User store handle, shared by the auth guard and the OAuth callback.
    pub users: Arc<dyn UserStore>,

    /// Monster store handle.
    pub monsters: Arc<dyn MonsterStore>,

    /// Family store handle.
    pub families: Arc<dyn FamilyStore>,

    /// Collection store handle.
    pub collections: Arc<dyn CollectionStore>,
}

impl AppState {
    /// Creates the application state, wiring the SQLite-backed repositories
    /// over the shared connection pool.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        app_url: String,
    ) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.clone())),
            monsters: Arc::new(MonsterRepository::new(db.clone())),
            families: Arc::new(FamilyRepository::new(db.clone())),
            collections: Arc::new(CollectionRepository::new(db)),
            http_client,
            oauth_client,
            app_url,
        }
    }
}
