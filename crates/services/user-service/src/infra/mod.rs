//! Infrastructure layer - database connection and startup bootstrap.

mod bootstrap;
mod db;

pub use bootstrap::{bootstrap, BootstrapError, ConnectError, Connector, Sleeper, TokioSleeper};
pub use db::{connection_uri, redacted_uri, Database, MongoConnector};
