//! Core business logic module
//!
//! Contains the amount validator, the account ledger, statement rendering,
//! and the clock abstraction the ledger stamps transactions with.

pub mod clock;
pub mod ledger;
pub mod statement;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::Ledger;
pub use statement::{ColumnWidths, NO_TRANSACTIONS};
pub use validator::validate;
