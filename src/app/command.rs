//! Menu commands
//!
//! Operator keystrokes at the main menu map onto a closed set of commands.
//! Anything unrecognised becomes `Command::Invalid` so the controller can
//! match exhaustively.

/// A main-menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `d` - credit funds to the account
    Deposit,

    /// `w` - debit funds from the account
    Withdraw,

    /// `p` - print the transaction statement
    PrintStatement,

    /// `q` - end the session
    Quit,

    /// Any other input, kept trimmed for logging
    Invalid(String),
}

impl Command {
    /// Parse a menu line
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    pub fn parse(line: &str) -> Command {
        let choice = line.trim();
        match choice.to_lowercase().as_str() {
            "d" => Command::Deposit,
            "w" => Command::Withdraw,
            "p" => Command::PrintStatement,
            "q" => Command::Quit,
            _ => Command::Invalid(choice.to_string()),
        }
    }
}

/// Whether an amount-prompt line asks to return to the main menu
pub fn is_back_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}
