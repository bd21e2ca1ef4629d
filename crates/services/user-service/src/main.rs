//! User Service - REST API for user records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User records REST service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the database and start the HTTP server (default)
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve { host, port }) => user_service_lib::run_embedded(&host, port).await,
        None => {
            let config = user_service_lib::config::UserServiceConfig::from_env();
            user_service_lib::run_server_with_config(config).await
        }
    };

    // Fatal startup errors end the process
    if let Err(e) = result {
        tracing::error!("User service failed: {}", e);
        std::process::exit(1);
    }
}
