//! Interactive application module
//!
//! The presentation and controller layer around the ledger core.
//!
//! # Components
//!
//! - `command` - Closed set of main-menu commands
//! - `view` - All operator-facing text
//! - `controller` - The session loop tying input, core and view together

pub mod command;
pub mod controller;
pub mod view;

pub use command::Command;
pub use controller::BankApp;
pub use view::{View, DEFAULT_BANK_NAME};
