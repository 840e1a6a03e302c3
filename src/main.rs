//! Rust Bank Ledger CLI
//!
//! Interactive console for depositing, withdrawing and printing a statement
//! for a single in-memory account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bank-name "Rusty Savings"
//! cargo run -- --input session.txt
//! RUST_LOG=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (quit or end of input)
//! - 1: Error (script file not found, I/O failure on input or output)

use rust_bank_ledger::{cli, io, logging, BankApp, Ledger};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(args.log_level);

    let input = match io::open_input(args.input_file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("Failed to open operator input: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut app = BankApp::new(Ledger::new(), &args.bank_name);

    let stdout = std::io::stdout();
    if let Err(e) = app.run(input, stdout.lock()) {
        tracing::error!("Session aborted: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
