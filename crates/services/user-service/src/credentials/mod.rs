//! Database credential discovery.
//!
//! Credentials are written by a secret-injection agent into an export-style
//! file, with the process environment as fallback.

mod parser;
mod resolver;

pub use parser::parse_secrets;
pub use resolver::CredentialResolver;

use std::fmt;

use thiserror::Error;

/// Key marker for the database username.
pub const MONGO_USER_KEY: &str = "MONGO_USER";

/// Key marker for the database password.
pub const MONGO_PASSWORD_KEY: &str = "MONGO_PASSWORD";

/// Placeholder written wherever the password would otherwise appear.
pub const REDACTED: &str = "***hidden***";

/// Resolved database credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    password: String,
}

impl Credential {
    /// Build a credential, rejecting empty values.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let username = username.into();
        let password = password.into();

        if username.is_empty() {
            return Err(CredentialError::Incomplete(MONGO_USER_KEY));
        }
        if password.is_empty() {
            return Err(CredentialError::Incomplete(MONGO_PASSWORD_KEY));
        }

        Ok(Self { username, password })
    }

    /// Clear-text password, for building the connection string only.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Credential discovery errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// A single source lacked a value
    #[error("{0} not found or empty")]
    Incomplete(&'static str),

    /// No source produced both values
    #[error("MongoDB credentials not found in secrets file or environment variables")]
    CredentialsMissing,
}

/// Anything able to produce the database credential.
pub trait CredentialSource: Send + Sync {
    fn resolve(&self) -> Result<Credential, CredentialError>;
}
