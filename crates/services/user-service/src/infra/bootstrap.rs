//! Startup connection bootstrap.
//!
//! Resolves credentials once, then connects with a bounded fixed-interval
//! retry loop. The HTTP listener is only bound after this succeeds.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use common::RetryPolicy;

use crate::credentials::{Credential, CredentialError, CredentialSource, REDACTED};

/// A single failed connection attempt.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("failed to connect to MongoDB: {0}")]
    Client(mongodb::error::Error),

    #[error("failed to ping MongoDB: {0}")]
    Ping(mongodb::error::Error),

    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),
}

/// Fatal startup errors.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("could not connect to MongoDB after {attempts} attempts: {source}")]
    ConnectionFailure {
        attempts: u32,
        #[source]
        source: ConnectError,
    },
}

/// Opens and verifies a database connection.
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: Send;

    async fn connect(&self, credential: &Credential) -> Result<Self::Handle, ConnectError>;
}

/// Pause between connection attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolve credentials and connect, retrying per `policy`.
///
/// Missing credentials fail immediately. Connection failures are retried up
/// to `policy.max_attempts` attempts in total, sleeping `policy.interval()`
/// between two attempts.
pub async fn bootstrap<S, C, Z>(
    source: &S,
    connector: &C,
    sleeper: &Z,
    policy: RetryPolicy,
) -> Result<C::Handle, BootstrapError>
where
    S: CredentialSource + ?Sized,
    C: Connector + ?Sized,
    Z: Sleeper + ?Sized,
{
    let credential = source.resolve()?;
    info!(
        username = %credential.username,
        password = REDACTED,
        "Successfully resolved database credentials"
    );

    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match connector.connect(&credential).await {
            Ok(handle) => {
                info!(attempt, "Connected to MongoDB successfully");
                return Ok(handle);
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    username = %credential.username,
                    password = REDACTED,
                    error = %e,
                    "Failed to connect to MongoDB"
                );

                if attempt >= max_attempts {
                    return Err(BootstrapError::ConnectionFailure {
                        attempts: attempt,
                        source: e,
                    });
                }

                sleeper.sleep(policy.interval()).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use tokio_test::{assert_err, assert_ok};

    use super::*;

    struct FixedSource(Result<Credential, CredentialError>);

    impl CredentialSource for FixedSource {
        fn resolve(&self) -> Result<Credential, CredentialError> {
            self.0.clone()
        }
    }

    fn valid_source() -> FixedSource {
        FixedSource(Credential::new("appuser", "s3cr3t"))
    }

    /// Fails a set number of times, then hands out the attempt number.
    struct ScriptedConnector {
        failures: u32,
        calls: AtomicU32,
    }

    impl ScriptedConnector {
        fn failing(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn unreachable() -> Self {
            Self::failing(u32::MAX)
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Connector for ScriptedConnector {
        type Handle = u32;

        async fn connect(&self, credential: &Credential) -> Result<u32, ConnectError> {
            assert_eq!(credential.password(), "s3cr3t");
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures {
                Err(ConnectError::Timeout(Duration::from_secs(10)))
            } else {
                Ok(call)
            }
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        sleeps: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn sleeps(&self) -> Vec<Duration> {
            self.sleeps.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn test_connects_immediately_when_reachable() {
        let connector = ScriptedConnector::failing(0);
        let sleeper = RecordingSleeper::default();

        let handle = assert_ok!(
            bootstrap(&valid_source(), &connector, &sleeper, RetryPolicy::default()).await
        );

        assert_eq!(handle, 1);
        assert_eq!(connector.calls(), 1);
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let connector = ScriptedConnector::failing(3);
        let sleeper = RecordingSleeper::default();

        let handle = assert_ok!(
            bootstrap(&valid_source(), &connector, &sleeper, RetryPolicy::default()).await
        );

        assert_eq!(handle, 4);
        assert_eq!(sleeper.sleeps(), vec![Duration::from_secs(10); 3]);
    }

    #[tokio::test]
    async fn test_gives_up_after_ten_attempts() {
        let connector = ScriptedConnector::unreachable();
        let sleeper = RecordingSleeper::default();

        let err = assert_err!(
            bootstrap(&valid_source(), &connector, &sleeper, RetryPolicy::default()).await
        );

        assert!(matches!(
            err,
            BootstrapError::ConnectionFailure { attempts: 10, .. }
        ));
        assert_eq!(connector.calls(), 10);
        assert_eq!(sleeper.sleeps(), vec![Duration::from_secs(10); 9]);
    }

    #[tokio::test]
    async fn test_succeeds_on_last_attempt() {
        let connector = ScriptedConnector::failing(9);
        let sleeper = RecordingSleeper::default();

        let handle = assert_ok!(
            bootstrap(&valid_source(), &connector, &sleeper, RetryPolicy::default()).await
        );

        assert_eq!(handle, 10);
    }

    #[tokio::test]
    async fn test_missing_credentials_never_connect() {
        let source = FixedSource(Err(CredentialError::CredentialsMissing));
        let connector = ScriptedConnector::failing(0);
        let sleeper = RecordingSleeper::default();

        let err = assert_err!(
            bootstrap(&source, &connector, &sleeper, RetryPolicy::default()).await
        );

        assert!(matches!(
            err,
            BootstrapError::Credentials(CredentialError::CredentialsMissing)
        ));
        assert_eq!(connector.calls(), 0);
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_zero_attempt_policy_still_tries_once() {
        let connector = ScriptedConnector::unreachable();
        let sleeper = RecordingSleeper::default();
        let policy = RetryPolicy {
            max_attempts: 0,
            interval_ms: 1,
        };

        let err = assert_err!(bootstrap(&valid_source(), &connector, &sleeper, policy).await);

        assert!(matches!(
            err,
            BootstrapError::ConnectionFailure { attempts: 1, .. }
        ));
        assert_eq!(connector.calls(), 1);
    }
}
