//! staffdir CLI - personnel API server
//!
//! Entry point for the `staffdir` command. The only subcommand today is
//! `serve`, which runs the HTTP API against a PostgreSQL database.
//!
//! Usage:
//!   staffdir serve                      # 127.0.0.1:3040, DATABASE_URL from env/.env
//!   staffdir --debug serve -b 0.0.0.0:8080
//!   RUST_LOG=staffdir_server=debug staffdir serve

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "staffdir",
    author,
    version,
    about = "HTTP CRUD API for employees, departments, supervisors, and login"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is already set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env, when present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
