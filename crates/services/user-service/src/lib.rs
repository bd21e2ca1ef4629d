//! User Service Library
//!
//! REST API over a MongoDB `users` collection. Database credentials are
//! injected by a secret agent into a file (or supplied through the
//! environment) and resolved once at startup; the HTTP listener is only bound
//! after a verified database connection exists.

pub mod config;
pub mod credentials;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::credentials::CredentialResolver;
use crate::infra::{bootstrap, MongoConnector, TokioSleeper};
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the user service, overriding the listen address from the environment.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;

    run_server_with_config(config).await
}

/// Bootstrap the database connection, then serve HTTP.
pub async fn run_server_with_config(
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve credentials and connect (blocks until connected or exhausted)
    let resolver = CredentialResolver::new(&config.secrets.file);
    let connector = MongoConnector::new(config.database.clone());
    let database = bootstrap(&resolver, &connector, &TokioSleeper, config.retry).await?;
    info!(database = database.name(), "Database ready");

    // Create repository and state
    let user_repo = Arc::new(UserStore::new(&database, &config.database));
    let state = AppState::new(user_repo);

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.server.addr().parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
