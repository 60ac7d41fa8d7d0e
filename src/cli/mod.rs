//! CLI module for bookstore
//!
//! Provides command-line interface for:
//! - serve: Connect to the store and serve the HTTP API
//! - check-config: Print the effective configuration

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, init_logging, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
