//! bookstore entry point
//!
//! Delegates to the CLI module and exits non-zero on any error.

use bookstore::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
