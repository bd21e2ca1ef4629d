//! Shared configuration structures.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Get the full listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// MongoDB connection and operation configuration.
///
/// Credentials are not part of this structure; they are resolved separately
/// at startup and only live in the connection string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Network address of the database (`host:port`)
    pub host: String,
    /// Database name, also used as the authentication source
    pub database: String,
    /// Upper bound for a single connect-and-ping attempt, in milliseconds
    pub connect_timeout_ms: u64,
    /// Upper bound for an insert, in milliseconds
    pub create_timeout_ms: u64,
    /// Upper bound for a full collection read, in milliseconds
    pub list_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn create_timeout(&self) -> Duration {
        Duration::from_millis(self.create_timeout_ms)
    }

    pub fn list_timeout(&self) -> Duration {
        Duration::from_millis(self.list_timeout_ms)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "mongodb.mongo-vault-operator.svc.cluster.local:27017".to_string(),
            database: "appdb".to_string(),
            connect_timeout_ms: 10_000,
            create_timeout_ms: 5_000,
            list_timeout_ms: 10_000,
        }
    }
}

/// Fixed-interval retry policy for the startup connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Pause between two consecutive attempts, in milliseconds
    pub interval_ms: u64,
}

impl RetryPolicy {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval_ms: 10_000,
        }
    }
}

/// Location of agent-injected secret material.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecretsConfig {
    /// Export-style file written by the secret-injection agent
    pub file: PathBuf,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("/vault/secrets/mongo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_database_timeouts() {
        let config = DatabaseConfig::default();
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.create_timeout(), Duration::from_secs(5));
        assert!(config.list_timeout() > config.create_timeout());
    }

    #[test]
    fn test_service_addr() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }
}
