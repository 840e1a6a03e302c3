//! Account ledger
//!
//! This module provides the `Ledger` struct which owns the balance and the
//! append-only transaction history of a single account.
//!
//! The Ledger is responsible for:
//! - Applying validated amounts as credits or debits
//! - Rejecting debits that would make the balance negative
//! - Recording each committed mutation as an immutable `Transaction`
//! - Rendering the statement from its history
//!
//! # Invariants
//!
//! - `balance` equals the sum of the signed amounts in `history`, starting
//!   from zero
//! - `balance` is never negative
//! - `history` only grows, in commit order
//!
//! `apply` is the only mutator. Every rejection happens before any state is
//! touched, so balance and history always move together.

use crate::core::clock::{Clock, SystemClock};
use crate::core::statement;
use crate::types::{LedgerError, Money, Transaction, TransactionKind};

/// Balance and transaction history for one account
///
/// Fields are private; callers read the balance by value and the history
/// through a shared slice.
#[derive(Debug)]
pub struct Ledger<C: Clock = SystemClock> {
    /// Current balance, never negative
    balance: Money,

    /// Committed transactions in chronological order
    history: Vec<Transaction>,

    /// Timestamp source for new transactions
    clock: C,
}

impl Ledger<SystemClock> {
    /// Create an empty ledger stamped with local wall-clock time
    ///
    /// # Returns
    ///
    /// A new Ledger with a balance of 0.00 and no transactions
    pub fn new() -> Self {
        Ledger::with_clock(SystemClock)
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    /// Create an empty ledger that reads timestamps from `clock`
    pub fn with_clock(clock: C) -> Self {
        Ledger {
            balance: Money::ZERO,
            history: Vec::new(),
            clock,
        }
    }

    /// Apply a credit or debit to the balance
    ///
    /// `amount` is expected to come from the amount validator and so be
    /// strictly positive; anything else is rejected without touching state.
    ///
    /// # Arguments
    ///
    /// * `amount` - The magnitude of the mutation
    /// * `kind` - Whether to credit or debit the account
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The newly committed transaction
    /// * `Err(LedgerError)` - If the mutation was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - A debit exceeds the current balance (draining to exactly zero is allowed)
    /// - A credit would overflow the decimal range
    pub fn apply(
        &mut self,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Transaction, LedgerError> {
        if amount.is_zero() || amount.is_negative() {
            tracing::info!("Rejected {} of non-positive amount {}", kind, amount);
            return Err(LedgerError::invalid_amount(amount));
        }

        let (delta, new_balance) = match kind {
            TransactionKind::Credit => {
                let new_balance = self
                    .balance
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("credit"))?;
                (amount, new_balance)
            }
            TransactionKind::Debit => {
                if amount > self.balance {
                    tracing::info!(
                        "Rejected debit of {}: balance is only {}",
                        amount,
                        self.balance
                    );
                    return Err(LedgerError::insufficient_funds(self.balance, amount));
                }
                let new_balance = self
                    .balance
                    .checked_sub(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("debit"))?;
                (-amount, new_balance)
            }
        };

        // Commit balance and history together
        let transaction = Transaction::new(self.clock.now(), delta, new_balance);
        self.balance = new_balance;
        self.history.push(transaction);

        tracing::debug!(
            "Committed {} of {}, balance now {}",
            kind,
            amount,
            new_balance
        );

        Ok(transaction)
    }

    /// Credit `amount` to the account
    pub fn deposit(&mut self, amount: Money) -> Result<Transaction, LedgerError> {
        self.apply(amount, TransactionKind::Credit)
    }

    /// Debit `amount` from the account
    pub fn withdraw(&mut self, amount: Money) -> Result<Transaction, LedgerError> {
        self.apply(amount, TransactionKind::Debit)
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Committed transactions, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Number of committed transactions
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Render the statement rows
    ///
    /// See [`statement::render`] for the layout.
    pub fn statement(&self) -> Vec<String> {
        statement::render(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::validator::validate;
    use rstest::rstest;

    fn ledger() -> Ledger<FixedClock> {
        Ledger::with_clock(FixedClock::at(2024, 3, 7, 21, 5, 3).unwrap())
    }

    fn money(raw: &str) -> Money {
        validate(raw).unwrap()
    }

    fn sum_of_history<C: Clock>(ledger: &Ledger<C>) -> Money {
        ledger
            .history()
            .iter()
            .fold(Money::ZERO, |acc, tx| acc.checked_add(tx.amount()).unwrap())
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(), Money::ZERO);
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_credit_on_fresh_ledger() {
        let mut ledger = ledger();

        let tx = ledger.apply(money("500.00"), TransactionKind::Credit).unwrap();

        assert_eq!(ledger.balance(), money("500"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(tx.amount(), money("500"));
        assert_eq!(tx.balance(), money("500"));
        assert_eq!(tx.kind(), TransactionKind::Credit);
        assert!(ledger.statement()[1].contains("500.00 | 500.00"));
    }

    #[test]
    fn test_debit_records_negative_amount() {
        let mut ledger = ledger();
        ledger.deposit(money("500.00")).unwrap();

        let tx = ledger.apply(money("100.00"), TransactionKind::Debit).unwrap();

        assert_eq!(ledger.balance(), money("400"));
        assert_eq!(tx.amount(), -money("100"));
        assert_eq!(tx.kind(), TransactionKind::Debit);
        assert!(ledger.statement()[2].contains("-100.00 | 400.00"));
    }

    #[rstest]
    #[case::one_cent_over("100.00", "100.01")]
    #[case::empty_account("0", "100.00")]
    #[case::far_over("0.01", "1000000")]
    fn test_debit_over_balance_is_rejected(#[case] opening: &str, #[case] debit: &str) {
        let mut ledger = ledger();
        if opening != "0" {
            ledger.deposit(money(opening)).unwrap();
        }
        let balance_before = ledger.balance();
        let len_before = ledger.len();

        let result = ledger.apply(money(debit), TransactionKind::Debit);

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(balance_before, money(debit)))
        );
        assert_eq!(ledger.balance(), balance_before);
        assert_eq!(ledger.len(), len_before);
    }

    #[test]
    fn test_debit_can_drain_to_zero() {
        let mut ledger = ledger();
        ledger.deposit(money("100.00")).unwrap();

        let tx = ledger.withdraw(money("100.00")).unwrap();

        assert_eq!(ledger.balance(), Money::ZERO);
        assert_eq!(tx.balance().to_string(), "0.00");
        assert_eq!(ledger.len(), 2);
    }

    #[rstest]
    #[case::zero(Money::ZERO, TransactionKind::Credit)]
    #[case::negative_credit(Money::from_cents(-100), TransactionKind::Credit)]
    #[case::negative_debit(Money::from_cents(-100), TransactionKind::Debit)]
    fn test_non_positive_amounts_are_rejected(#[case] amount: Money, #[case] kind: TransactionKind) {
        let mut ledger = ledger();
        ledger.deposit(money("10")).unwrap();

        let result = ledger.apply(amount, kind);

        assert_eq!(result, Err(LedgerError::invalid_amount(amount)));
        assert_eq!(ledger.balance(), money("10"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_credit_overflow_leaves_state_unchanged() {
        let mut ledger = ledger();
        ledger.deposit(Money::MAX).unwrap();

        let result = ledger.deposit(money("0.01"));

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("credit")));
        assert_eq!(ledger.balance(), Money::MAX);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_balance_matches_history_sum() {
        let mut ledger = ledger();
        let steps = [
            ("250.10", TransactionKind::Credit),
            ("0.10", TransactionKind::Debit),
            ("1000", TransactionKind::Debit),
            ("0.01", TransactionKind::Credit),
            ("250.01", TransactionKind::Debit),
            ("5", TransactionKind::Debit),
            ("33.33", TransactionKind::Credit),
        ];

        for (raw, kind) in steps {
            let _ = ledger.apply(money(raw), kind);
            assert_eq!(ledger.balance(), sum_of_history(&ledger));
            assert!(!ledger.balance().is_negative());
        }

        assert_eq!(ledger.balance().to_string(), "33.33");
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_repeated_cent_credits_do_not_drift() {
        let mut ledger = ledger();
        for _ in 0..10_000 {
            ledger.deposit(money("0.01")).unwrap();
        }
        assert_eq!(ledger.balance().to_string(), "100.00");
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let mut ledger = ledger();
        ledger.deposit(money("1")).unwrap();
        ledger.deposit(money("2")).unwrap();
        ledger.withdraw(money("3")).unwrap();

        let balances: Vec<String> = ledger
            .history()
            .iter()
            .map(|tx| tx.balance().to_string())
            .collect();
        assert_eq!(balances, vec!["1.00", "3.00", "0.00"]);
    }

    #[test]
    fn test_statement_is_idempotent() {
        let mut ledger = ledger();
        ledger.deposit(money("500")).unwrap();
        ledger.withdraw(money("100")).unwrap();

        assert_eq!(ledger.statement(), ledger.statement());
    }

    #[test]
    fn test_statement_on_empty_ledger() {
        let ledger = ledger();
        let rows = ledger.statement();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], statement::NO_TRANSACTIONS);
    }

    #[test]
    fn test_transactions_use_injected_clock() {
        let mut ledger = ledger();
        let tx = ledger.deposit(money("1")).unwrap();
        assert_eq!(
            tx.timestamp().format(crate::types::TIMESTAMP_FORMAT).to_string(),
            "07 Mar 2024 09:05:03PM"
        );
    }
}
