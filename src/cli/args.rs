//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--config <path>] [--in-memory]
//! - bookstore check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookstore - HTTP record service for books
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the document store and serve the book API
    Serve {
        /// Path to a JSON configuration file; built-in defaults if omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep books in process memory instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Print the effective configuration and exit
    CheckConfig {
        /// Path to a JSON configuration file; built-in defaults if omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["bookstore", "serve", "--in-memory"]).unwrap();
        match cli.command {
            Command::Serve { config, in_memory } => {
                assert!(config.is_none());
                assert!(in_memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_check_config_verbose() {
        let cli =
            Cli::try_parse_from(["bookstore", "check-config", "--config", "b.json", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::CheckConfig { config } => {
                assert_eq!(config, Some(PathBuf::from("b.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["bookstore"]).is_err());
    }
}
