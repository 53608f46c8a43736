//! HTTP server command
//!
//! Builds the connection pool (which doubles as the startup connectivity
//! check) and runs the server until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use staffdir_server::db::create_pool;
use staffdir_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3040")]
    pub bind: SocketAddr,

    /// Directory where uploaded photos are stored
    #[arg(long, default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting staffdir server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to the database")?;
    tracing::info!("Database connection established");

    let config = ServerConfig {
        bind_addr: args.bind,
        upload_dir: args.upload_dir,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
