//! Database connection and initialization.

use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use tokio::time::timeout;

use common::DatabaseConfig;
use domain::SERVICE_NAME;

use super::bootstrap::{ConnectError, Connector};
use crate::credentials::{Credential, REDACTED};

/// Database wrapper for connection management.
///
/// Cloning is cheap; the driver shares one connection pool between clones.
#[derive(Clone, Debug)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Open a client and verify it with an explicit ping.
    pub async fn connect(
        config: &DatabaseConfig,
        credential: &Credential,
    ) -> Result<Self, ConnectError> {
        let limit = config.connect_timeout();

        timeout(limit, Self::open(config, credential))
            .await
            .map_err(|_| ConnectError::Timeout(limit))?
    }

    async fn open(config: &DatabaseConfig, credential: &Credential) -> Result<Self, ConnectError> {
        let database = Self::client(config, credential).await?;
        database.ping().await.map_err(ConnectError::Ping)?;
        Ok(database)
    }

    /// Build a client without contacting the server.
    pub(crate) async fn client(
        config: &DatabaseConfig,
        credential: &Credential,
    ) -> Result<Self, ConnectError> {
        let uri = connection_uri(config, credential);
        tracing::debug!(target_uri = %redacted_uri(config, credential), "Opening MongoDB client");

        let mut options = ClientOptions::parse(uri.as_str())
            .await
            .map_err(ConnectError::Client)?;
        options.app_name = Some(SERVICE_NAME.to_string());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.connect_timeout());

        let client = Client::with_options(options).map_err(ConnectError::Client)?;
        Ok(Self {
            db: client.database(&config.database),
        })
    }

    /// Check database connectivity with the `ping` command.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Typed handle to a collection of this database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Database name.
    pub fn name(&self) -> &str {
        self.db.name()
    }
}

/// Build the connection string embedding the credential.
///
/// The database doubles as the authentication source.
pub fn connection_uri(config: &DatabaseConfig, credential: &Credential) -> String {
    format!(
        "mongodb://{}:{}@{}/{}",
        urlencoding::encode(&credential.username),
        urlencoding::encode(credential.password()),
        config.host,
        config.database
    )
}

/// Connection string safe for logs.
pub fn redacted_uri(config: &DatabaseConfig, credential: &Credential) -> String {
    format!(
        "mongodb://{}:{}@{}/{}",
        urlencoding::encode(&credential.username),
        REDACTED,
        config.host,
        config.database
    )
}

/// Connector opening real MongoDB clients.
#[derive(Debug, Clone)]
pub struct MongoConnector {
    config: DatabaseConfig,
}

impl MongoConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Database;

    async fn connect(&self, credential: &Credential) -> Result<Database, ConnectError> {
        Database::connect(&self.config, credential).await
    }
}
