//! Transaction-related types for the bank ledger
//!
//! This module defines the transaction kind flag passed into the ledger and
//! the immutable transaction record the ledger appends to its history.

use super::money::Money;
use chrono::NaiveDateTime;
use std::fmt;

/// strftime pattern for statement timestamps, e.g. `07 Mar 2024 09:05:03PM`
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y %I:%M:%S%p";

/// Width of the statement date column
///
/// Sized to the longest rendered timestamp (`dd MMM yyyy HH:mm:ssAM`).
pub const DATE_WIDTH: usize = 22;

/// Direction of a ledger mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// A deposit; increases the balance
    Credit,

    /// A withdrawal; decreases the balance, bounded by the available balance
    Debit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Credit => write!(f, "credit"),
            TransactionKind::Debit => write!(f, "debit"),
        }
    }
}

/// A committed ledger entry
///
/// Created once by the ledger at the moment a mutation is applied and never
/// changed afterwards. The amount is the signed delta: positive for credits,
/// negative for debits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    timestamp: NaiveDateTime,
    amount: Money,
    balance: Money,
}

impl Transaction {
    pub(crate) fn new(timestamp: NaiveDateTime, amount: Money, balance: Money) -> Self {
        Transaction {
            timestamp,
            amount,
            balance,
        }
    }

    /// When the transaction was committed
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Signed amount (negative for debits)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Balance immediately after this transaction
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Kind of transaction, derived from the sign of the amount
    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_negative() {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }

    /// Render this transaction as a statement row
    ///
    /// Amount and balance are left-justified to the given widths; the date
    /// column is always `DATE_WIDTH` wide.
    pub fn format_row(&self, amount_width: usize, balance_width: usize) -> String {
        let date = self.timestamp.format(TIMESTAMP_FORMAT).to_string();
        format!(
            "{:<date_width$} | {:<amount_width$} | {:<balance_width$}",
            date,
            self.amount.to_string(),
            self.balance.to_string(),
            date_width = DATE_WIDTH,
        )
    }
}
