//! Statement rendering
//!
//! Turns the ledger history into column-aligned text rows. Rendering is a
//! pure read: the rows are returned to the caller, which decides where to
//! print them.
//!
//! # Layout
//!
//! ```text
//! Date                   | Amount  | Balance
//! 07 Mar 2024 09:05:03PM | 500.00  | 500.00
//! 07 Mar 2024 09:06:10PM | -100.00 | 400.00
//! ```
//!
//! The amount and balance columns are as wide as their longest formatted
//! value or header word; the date column has a fixed width.

use crate::types::{Transaction, DATE_WIDTH};

/// Row emitted in place of transactions when the history is empty
pub const NO_TRANSACTIONS: &str = "No transactions found.";

const DATE_HEADER: &str = "Date";
const AMOUNT_HEADER: &str = "Amount";
const BALANCE_HEADER: &str = "Balance";

// Header widths used when there is nothing to measure
const EMPTY_DATE_WIDTH: usize = 20;
const EMPTY_AMOUNT_WIDTH: usize = 10;
const EMPTY_BALANCE_WIDTH: usize = 10;

/// Widths of the variable statement columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub amount: usize,
    pub balance: usize,
}

impl ColumnWidths {
    /// Measure the widest formatted amount and balance in `history`
    ///
    /// Never narrower than the header words `Amount` and `Balance`.
    pub fn measure(history: &[Transaction]) -> Self {
        history.iter().fold(
            ColumnWidths {
                amount: AMOUNT_HEADER.len(),
                balance: BALANCE_HEADER.len(),
            },
            |widths, tx| ColumnWidths {
                amount: widths.amount.max(tx.amount().to_string().len()),
                balance: widths.balance.max(tx.balance().to_string().len()),
            },
        )
    }
}

fn header_row(date_width: usize, amount_width: usize, balance_width: usize) -> String {
    format!(
        "{:<date_width$} | {:<amount_width$} | {:<balance_width$}",
        DATE_HEADER, AMOUNT_HEADER, BALANCE_HEADER
    )
}

/// Render `history` as statement rows
///
/// Returns a header row followed by one row per transaction in insertion
/// order. An empty history yields a header and the `NO_TRANSACTIONS` row.
pub fn render(history: &[Transaction]) -> Vec<String> {
    if history.is_empty() {
        return vec![
            header_row(EMPTY_DATE_WIDTH, EMPTY_AMOUNT_WIDTH, EMPTY_BALANCE_WIDTH),
            NO_TRANSACTIONS.to_string(),
        ];
    }

    let widths = ColumnWidths::measure(history);

    let mut rows = Vec::with_capacity(history.len() + 1);
    rows.push(header_row(DATE_WIDTH, widths.amount, widths.balance));
    rows.extend(
        history
            .iter()
            .map(|tx| tx.format_row(widths.amount, widths.balance)),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn tx(hour: u32, amount_cents: i64, balance_cents: i64) -> Transaction {
        Transaction::new(
            at(hour),
            Money::from_cents(amount_cents),
            Money::from_cents(balance_cents),
        )
    }

    #[test]
    fn test_empty_history() {
        let rows = render(&[]);
        assert_eq!(
            rows,
            vec![
                "Date                 | Amount     | Balance   ".to_string(),
                "No transactions found.".to_string(),
            ]
        );
    }

    #[test]
    fn test_widths_default_to_header_words() {
        let widths = ColumnWidths::measure(&[tx(9, 100, 100)]);
        assert_eq!(
            widths,
            ColumnWidths {
                amount: 6,
                balance: 7
            }
        );
    }

    #[test]
    fn test_widths_grow_with_values() {
        let history = [
            tx(9, 999_999_999_999_999_999, 999_999_999_999_999_999),
            tx(10, -199_999_999_999_999_999, 800_000_000_000_000_000),
        ];
        let widths = ColumnWidths::measure(&history);
        assert_eq!(widths.amount, "-1999999999999999.99".len());
        assert_eq!(widths.balance, "9999999999999999.99".len());
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let history = [tx(9, 50000, 50000), tx(10, -10000, 40000)];
        let rows = render(&history);

        assert_eq!(
            rows,
            vec![
                "Date                   | Amount  | Balance".to_string(),
                "07 Mar 2024 09:00:00AM | 500.00  | 500.00 ".to_string(),
                "07 Mar 2024 10:00:00AM | -100.00 | 400.00 ".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_rows_share_column_positions() {
        let history = [
            tx(9, 1, 1),
            tx(13, 123_456_789, 123_456_790),
            tx(23, -123_456_790, 0),
        ];
        let rows = render(&history);

        let first_bar = rows[0].find(" | ").unwrap();
        let last_bar = rows[0].rfind(" | ").unwrap();
        for row in &rows {
            assert_eq!(row.len(), rows[0].len());
            assert_eq!(row.find(" | ").unwrap(), first_bar);
            assert_eq!(row.rfind(" | ").unwrap(), last_bar);
        }
    }
}
