//! Credential resolution: secrets file first, environment second.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::{
    parse_secrets, Credential, CredentialError, CredentialSource, MONGO_PASSWORD_KEY,
    MONGO_USER_KEY,
};

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves the database credential from the agent-injected file, falling
/// back to the `MONGO_USER` / `MONGO_PASSWORD` environment variables.
pub struct CredentialResolver {
    secrets_file: PathBuf,
    env: EnvLookup,
}

impl CredentialResolver {
    /// Resolver reading the process environment.
    pub fn new(secrets_file: impl Into<PathBuf>) -> Self {
        Self::with_env(secrets_file, |key| env::var(key).ok())
    }

    /// Resolver with a custom environment lookup.
    pub fn with_env<F>(secrets_file: impl Into<PathBuf>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            secrets_file: secrets_file.into(),
            env: Box::new(env),
        }
    }

    fn read_file(&self) -> Result<Credential, CredentialError> {
        let path = self.secrets_file.as_path();
        let contents = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "secrets file not readable");
                return Err(CredentialError::CredentialsMissing);
            }
        };

        parse_secrets(&contents).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "secrets file incomplete");
        })
    }

    fn read_env(&self) -> Result<Credential, CredentialError> {
        let username = (self.env)(MONGO_USER_KEY).unwrap_or_default();
        let password = (self.env)(MONGO_PASSWORD_KEY).unwrap_or_default();
        Credential::new(username, password)
    }
}

impl CredentialSource for CredentialResolver {
    fn resolve(&self) -> Result<Credential, CredentialError> {
        if let Ok(credential) = self.read_file() {
            info!(
                path = %self.secrets_file.display(),
                username = %credential.username,
                "Credentials read from secrets file"
            );
            return Ok(credential);
        }

        match self.read_env() {
            Ok(credential) => {
                info!(username = %credential.username, "Credentials read from environment");
                Ok(credential)
            }
            Err(e) => {
                debug!(error = %e, "environment credentials incomplete");
                Err(CredentialError::CredentialsMissing)
            }
        }
    }
}
