//! pismo-init - one-shot MongoDB provisioning
//!
//! Provisions the pismo environment in three sequential steps: select the
//! target database, create the application principal, create the initial
//! empty collection. Exits non-zero on the first failed step; completed
//! steps are not rolled back.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pismo_init::{
    bootstrap::{self, BootstrapPlan},
    config::Args,
    db::MongoClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pismo_init={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  pismo-init v{}", env!("CARGO_PKG_VERSION"));
    info!("======================================");
    info!("MongoDB: {}", args.mongodb_uri);
    info!("Target database: {}", args.database);
    info!("Principal: {} ({} on {})", args.app_user, args.role, args.database);
    info!("Collection: {}", args.collection);
    info!("======================================");

    // Connect with the administrative URI
    let mongo = match MongoClient::new(&args.mongodb_uri).await {
        Ok(client) => {
            info!("MongoDB connected successfully");
            client
        }
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    // Run the three provisioning operations in order
    let plan = BootstrapPlan::from_args(&args);
    if let Err(e) = bootstrap::run(&mongo, &plan).await {
        error!("Bootstrap failed: {}", e);
        std::process::exit(1);
    }

    info!("Bootstrap complete");
    Ok(())
}
