//! Rust Bank Ledger Library
//! # Overview
//!
//! This library provides a single-account, single-session ledger: it
//! validates operator-entered amounts, applies them as credits or debits
//! under a non-negative balance rule, keeps an append-only transaction
//! history, and renders that history as a column-aligned statement.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Money, Transaction, errors)
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Raw input to validated `Money`
//!   - [`core::ledger`] - Balance and history management
//!   - [`core::statement`] - Statement rendering
//!   - [`core::clock`] - Injectable time source
//! - [`io`] - Operator input source and line reading
//! - [`app`] - Menu commands, operator-facing text, and the session loop
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Diagnostic logging setup
//!
//! # Example
//!
//! ```
//! use rust_bank_ledger::{validate, Ledger, TransactionKind};
//!
//! let mut ledger = Ledger::new();
//! let amount = validate("500.00").unwrap();
//! ledger.apply(amount, TransactionKind::Credit).unwrap();
//! assert_eq!(ledger.balance().to_string(), "500.00");
//! ```
//!
//! # Money
//!
//! Amounts are exact decimals at two fractional digits. Input declaring
//! more than two fractional digits is rejected rather than rounded.

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use app::{BankApp, Command};
pub use crate::core::{validate, Clock, FixedClock, Ledger, SystemClock};
pub use types::{AmountError, AppError, LedgerError, Money, Transaction, TransactionKind};
