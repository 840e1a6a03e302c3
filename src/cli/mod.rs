//! Command-line configuration for the bank-ledger binary
//!
//! - `--input <FILE>` replays menu choices and amounts from a script file
//! - `--bank-name <NAME>` sets the name shown in the menu and goodbye
//! - `--log-level <LEVEL>` sets stderr diagnostics (`RUST_LOG` wins)

mod args;

pub use args::{CliArgs, LogLevel};

use clap::Parser;

/// Read the session configuration from the process arguments
///
/// Invalid options and `--help` are handled by clap, which prints a message
/// and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
