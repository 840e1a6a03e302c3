//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `money`: Exact two-decimal currency amounts
//! - `transaction`: Transaction kind and committed transaction records
//! - `error`: Error types for validation, the ledger, and sessions

pub mod error;
pub mod money;
pub mod transaction;

pub use error::{AmountError, AppError, LedgerError};
pub use money::{Money, MONEY_SCALE};
pub use transaction::{Transaction, TransactionKind, DATE_WIDTH, TIMESTAMP_FORMAT};
