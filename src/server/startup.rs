//! Initialization of the database, session store, and external clients.

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Initializes the tracing subscriber with env-filter support.
///
/// `RUST_LOG` controls verbosity; defaults to `info` when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store and cookie layer over the existing SQLite pool.
///
/// The store shares the SeaORM connection pool, so sessions live in the same
/// database file as the domain tables. The cookie is HTTP-only (the layer's
/// default), secure, and same-site lax. Session expiry is pinned per session
/// at login; the store refuses to load expired rows regardless of the
/// background sweep.
///
/// # Returns
/// - `Ok((store, layer))` - The store (for the expiry sweep) and the axum layer
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<(SqliteStore, SessionManagerLayer<SqliteStore>), AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store.clone())
        .with_secure(true)
        .with_same_site(SameSite::Lax);

    Ok((store, layer))
}

/// Creates the HTTP client used for Discord API calls.
///
/// Redirects are disabled to prevent SSRF through attacker-influenced URLs.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the OAuth2 client for the Discord authentication flow.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::InvalidUrl)?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::InvalidUrl)?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(ConfigError::InvalidUrl)?,
        );

    Ok(client)
}
