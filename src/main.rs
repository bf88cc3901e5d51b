mod model;
mod server;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, scheduler::session_sweep, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session_store, session_layer) = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    tracing::info!("Starting server");

    // Sweep expired session rows hourly; loads already re-check expiry, so
    // this only reclaims storage.
    tokio::spawn(async move {
        if let Err(e) = session_sweep::start_scheduler(session_store).await {
            tracing::error!("Session sweep scheduler error: {}", e);
        }
    });

    // Browsers send the session cookie cross-origin, so origins are mirrored
    // rather than wildcarded.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.app_url.clone(),
        ))
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
