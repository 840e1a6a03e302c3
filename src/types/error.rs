//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while validating
//! operator input, applying transactions, and running a session.
//!
//! # Error Categories
//!
//! - **Amount Errors**: The raw token is not an acceptable monetary amount
//! - **Ledger Errors**: A validated amount violates a ledger business rule
//! - **Application Errors**: Input source or output sink failures
//!
//! Amount and ledger errors are recoverable: the session reports them to the
//! operator and prompts again. Application errors end the session.

use super::money::Money;
use thiserror::Error;

/// Rejection reasons for raw amount input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input is not a parsable decimal (empty, letters, symbols)
    #[error("'{input}' is not a number")]
    NotANumber {
        /// The trimmed input token
        input: String,
    },

    /// Input declares more than two fractional digits
    ///
    /// Checked against the literal, so `10.000` is rejected even though it is
    /// numerically a whole amount of cents.
    #[error("'{input}' has {places} decimal places, at most 2 are allowed")]
    TooManyDecimalPlaces {
        /// The trimmed input token
        input: String,
        /// Number of fractional digits in the literal
        places: u32,
    },

    /// Input is strictly negative
    #[error("'{input}' is negative")]
    Negative {
        /// The trimmed input token
        input: String,
    },

    /// Input is exactly zero
    #[error("'{input}' is zero")]
    Zero {
        /// The trimmed input token
        input: String,
    },
}

/// Business-rule rejections raised by the ledger
///
/// When any of these is returned the ledger balance and history are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit would drive the balance below zero
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Money,
        /// Requested debit amount
        requested: Money,
    },

    /// Amount handed to the ledger is zero or negative
    ///
    /// Validated input never triggers this; it keeps the balance invariant
    /// intact for callers that build `Money` values themselves.
    #[error("Invalid amount {amount}: must be strictly positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Money,
    },

    /// The new balance would exceed the representable decimal range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

/// Fatal errors for an interactive session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Script file given with `--input` does not exist
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found
        path: String,
    },

    /// Reading operator input or writing output failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AmountError {
    /// Create a NotANumber error
    pub fn not_a_number(input: &str) -> Self {
        AmountError::NotANumber {
            input: input.to_string(),
        }
    }

    /// Create a TooManyDecimalPlaces error
    pub fn too_many_decimal_places(input: &str, places: u32) -> Self {
        AmountError::TooManyDecimalPlaces {
            input: input.to_string(),
            places,
        }
    }

    /// Create a Negative error
    pub fn negative(input: &str) -> Self {
        AmountError::Negative {
            input: input.to_string(),
        }
    }

    /// Create a Zero error
    pub fn zero(input: &str) -> Self {
        AmountError::Zero {
            input: input.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Money, requested: Money) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Money) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

impl AppError {
    /// Create an InputNotFound error
    pub fn input_not_found(path: &str) -> Self {
        AppError::InputNotFound {
            path: path.to_string(),
        }
    }
}
