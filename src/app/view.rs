//! Operator-facing text
//!
//! Every message the session prints lives here, so the controller only
//! decides *what* happened and the view decides how it reads.

use crate::types::{AmountError, AppError, LedgerError, Money};
use std::io::Write;

/// Bank name used when none is configured
pub const DEFAULT_BANK_NAME: &str = "AwesomeGIC Bank";

const RETURN_HINT: &str = "Enter [q] to return to main page.";

/// Writes menus, prompts and outcomes to the operator's output
pub struct View<W: Write> {
    out: W,
    bank_name: String,
}

impl<W: Write> View<W> {
    pub fn new(out: W, bank_name: &str) -> Self {
        View {
            out,
            bank_name: bank_name.to_string(),
        }
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(
            self.out,
            "Welcome to {}! What would you like to do?",
            self.bank_name
        )?;
        writeln!(self.out, "[D]eposit")?;
        writeln!(self.out, "[W]ithdraw")?;
        writeln!(self.out, "[P]rint statement")?;
        writeln!(self.out, "[Q]uit")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn prompt_for_deposit(&mut self) -> Result<(), AppError> {
        self.prompt("Please enter the amount to deposit: ")
    }

    pub fn prompt_for_withdrawal(&mut self) -> Result<(), AppError> {
        self.prompt("Please enter the amount to withdraw: ")
    }

    // Prompts stay on the operator's input line
    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn show_deposit_success(&mut self, amount: Money) -> Result<(), AppError> {
        writeln!(
            self.out,
            "Thank you. ${} has been deposited to your account.",
            amount
        )?;
        Ok(())
    }

    pub fn show_withdrawal_success(&mut self, amount: Money) -> Result<(), AppError> {
        writeln!(self.out, "Thank you. ${} has been withdrawn.", amount)?;
        Ok(())
    }

    /// Explain why an amount was rejected and how to go back
    pub fn show_amount_error(&mut self, error: &AmountError) -> Result<(), AppError> {
        let message = match error {
            AmountError::NotANumber { .. } => "Invalid amount. Please try again.",
            AmountError::TooManyDecimalPlaces { .. } => {
                "Your amount should be rounded to the cent. Please try again."
            }
            AmountError::Negative { .. } => {
                "Your amount must be a positive number. Please try again."
            }
            AmountError::Zero { .. } => "Your amount is too small. Please try again.",
        };
        self.retry_message(message)
    }

    /// Explain why the ledger refused a transaction and how to go back
    pub fn show_ledger_error(&mut self, error: &LedgerError) -> Result<(), AppError> {
        let message = match error {
            LedgerError::InsufficientFunds { .. } => {
                "Your bank account has insufficient funds. Please try again."
            }
            LedgerError::InvalidAmount { .. } => {
                "Your amount must be a positive number. Please try again."
            }
            LedgerError::ArithmeticOverflow { .. } => {
                "Your amount is too large to process. Please try again."
            }
        };
        self.retry_message(message)
    }

    fn retry_message(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, "{}", RETURN_HINT)?;
        Ok(())
    }

    pub fn show_statement(&mut self, rows: &[String]) -> Result<(), AppError> {
        for row in rows {
            writeln!(self.out, "{}", row)?;
        }
        Ok(())
    }

    pub fn error_invalid_action(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Invalid option. Please try again.")?;
        Ok(())
    }

    pub fn show_goodbye(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Thank you for banking with {}.", self.bank_name)?;
        writeln!(self.out, "Have a nice day!")?;
        self.out.flush()?;
        Ok(())
    }
}
