//! CLI command implementations
//!
//! `serve` follows a fixed boot order: configuration, store connection,
//! listener. A failure at any step ends the process; nothing is retried.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::http_server::HttpServer;
use crate::store::{BookStore, MemoryBookStore, MongoBookStore};

/// Parse arguments, install logging and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    run_command(cli.command)
}

/// Install the global tracing subscriber
///
/// `--verbose` forces debug; otherwise `RUST_LOG` applies, defaulting to info.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, in_memory } => serve(config.as_deref(), in_memory),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Connect to the store and serve the book API until the process exits
pub fn serve(config_path: Option<&Path>, in_memory: bool) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    let runtime = Runtime::new()?;

    runtime.block_on(async move {
        let store = open_store(&config, in_memory).await?;
        HttpServer::new(config.server, store)
            .start()
            .await
            .map_err(|e| {
                error!(error = %e, "server stopped");
                CliError::serve_failed(e.to_string())
            })
    })
}

async fn open_store(config: &Config, in_memory: bool) -> CliResult<Arc<dyn BookStore>> {
    if in_memory {
        warn!("using in-memory book store; records are lost on exit");
        return Ok(Arc::new(MemoryBookStore::new()));
    }

    info!(uri = %config.store.uri, "connecting to document store");
    match MongoBookStore::connect(&config.store).await {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => {
            error!(error = %e, "document store unreachable");
            Err(CliError::store_unavailable(e.to_string()))
        }
    }
}

/// Print the effective configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    write_json(&mut io::stdout(), &config)
}
