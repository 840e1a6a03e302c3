//! Interactive session controller
//!
//! `BankApp` drives one operator session: it shows the menu, routes each
//! command, runs the deposit and withdrawal prompt loops, and reports
//! outcomes through the `View`. All business rules live in the validator and
//! the ledger; this layer only sequences calls and maps results to text.
//!
//! # Session Flow
//!
//! 1. Show the menu and read a command line
//! 2. Deposit / Withdraw: prompt for an amount until one is accepted, the
//!    operator enters `q`, or input ends
//! 3. Print statement: render the ledger statement
//! 4. Quit (or end of input): say goodbye and return

use crate::app::command::{is_back_sentinel, Command};
use crate::app::view::View;
use crate::core::{validate, Clock, Ledger};
use crate::io::LineReader;
use crate::types::{AppError, TransactionKind};
use std::io::{BufRead, Write};

/// What the session should do after a prompt loop returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the main menu
    Menu,
    /// Input is exhausted; end the session
    EndOfInput,
}

/// One interactive banking session over a single ledger
pub struct BankApp<C: Clock> {
    ledger: Ledger<C>,
    bank_name: String,
}

impl<C: Clock> BankApp<C> {
    /// Create a session over `ledger`
    ///
    /// # Arguments
    ///
    /// * `ledger` - The account ledger the session mutates
    /// * `bank_name` - Name shown in the menu and goodbye messages
    pub fn new(ledger: Ledger<C>, bank_name: &str) -> Self {
        BankApp {
            ledger,
            bank_name: bank_name.to_string(),
        }
    }

    /// Read-only access to the session's ledger
    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    /// Run the session until the operator quits or input ends
    ///
    /// # Arguments
    ///
    /// * `input` - Operator input, one command or amount per line
    /// * `output` - Where menus, prompts and results are written
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The session ended normally
    /// * `Err(AppError)` - Reading input or writing output failed
    ///
    /// Validation and ledger rejections are reported to the operator and
    /// never end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), AppError> {
        let mut lines = LineReader::new(input);
        let mut view = View::new(output, &self.bank_name);

        loop {
            view.show_menu()?;

            let Some(line) = lines.next_line()? else {
                break;
            };

            let command = Command::parse(&line);
            tracing::debug!("Menu command {:?}", command);

            let flow = match command {
                Command::Deposit => {
                    self.handle_amount(TransactionKind::Credit, &mut lines, &mut view)?
                }
                Command::Withdraw => {
                    self.handle_amount(TransactionKind::Debit, &mut lines, &mut view)?
                }
                Command::PrintStatement => {
                    view.show_statement(&self.ledger.statement())?;
                    Flow::Menu
                }
                Command::Quit => break,
                Command::Invalid(choice) => {
                    tracing::debug!("Unrecognised menu option '{}'", choice);
                    view.error_invalid_action()?;
                    Flow::Menu
                }
            };

            if flow == Flow::EndOfInput {
                break;
            }
        }

        view.show_goodbye()?;
        tracing::info!(
            "Session ended with balance {} after {} transactions",
            self.ledger.balance(),
            self.ledger.len()
        );
        Ok(())
    }

    /// Prompt for amounts until one is applied as `kind`
    ///
    /// Each rejected amount is explained and the prompt repeats. Entering the
    /// back sentinel returns to the menu without touching the ledger.
    fn handle_amount<R: BufRead, W: Write>(
        &mut self,
        kind: TransactionKind,
        lines: &mut LineReader<R>,
        view: &mut View<W>,
    ) -> Result<Flow, AppError> {
        loop {
            match kind {
                TransactionKind::Credit => view.prompt_for_deposit()?,
                TransactionKind::Debit => view.prompt_for_withdrawal()?,
            }

            let Some(line) = lines.next_line()? else {
                return Ok(Flow::EndOfInput);
            };

            if is_back_sentinel(&line) {
                return Ok(Flow::Menu);
            }

            let amount = match validate(&line) {
                Ok(amount) => amount,
                Err(e) => {
                    tracing::debug!("Rejected {} input: {}", kind, e);
                    view.show_amount_error(&e)?;
                    continue;
                }
            };

            match self.ledger.apply(amount, kind) {
                Ok(_) => {
                    match kind {
                        TransactionKind::Credit => view.show_deposit_success(amount)?,
                        TransactionKind::Debit => view.show_withdrawal_success(amount)?,
                    }
                    return Ok(Flow::Menu);
                }
                Err(e) => view.show_ledger_error(&e)?,
            }
        }
    }
}
