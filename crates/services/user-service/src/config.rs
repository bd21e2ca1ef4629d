//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::{DatabaseConfig, RetryPolicy, SecretsConfig, ServiceConfig};

/// User service configuration.
///
/// Holds no credentials: those are resolved at startup from the secrets file
/// or the environment.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// HTTP listener
    pub server: ServiceConfig,
    /// Database address and timeouts
    pub database: DatabaseConfig,
    /// Secret-injection file location
    pub secrets: SecretsConfig,
    /// Startup connection retry policy
    pub retry: RetryPolicy,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            server: ServiceConfig {
                host: lookup("HOST").unwrap_or(defaults.server.host),
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            database: DatabaseConfig {
                host: lookup("MONGO_HOST").unwrap_or(defaults.database.host),
                database: lookup("MONGO_DATABASE").unwrap_or(defaults.database.database),
                ..defaults.database
            },
            secrets: SecretsConfig {
                file: lookup("MONGO_SECRETS_FILE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.secrets.file),
            },
            retry: defaults.retry,
        }
    }
}
