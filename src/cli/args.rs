use crate::app::DEFAULT_BANK_NAME;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive single-account bank ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive single-account bank ledger", long_about = None)]
pub struct CliArgs {
    /// Script file to read operator input from instead of stdin
    #[arg(
        long = "input",
        value_name = "FILE",
        help = "Read menu choices and amounts from FILE instead of stdin"
    )]
    pub input_file: Option<PathBuf>,

    /// Bank name shown in the menu and goodbye messages
    #[arg(
        long = "bank-name",
        value_name = "NAME",
        default_value = DEFAULT_BANK_NAME,
        help = "Bank name shown to the operator"
    )]
    pub bank_name: String,

    /// Log verbosity for diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostic log level (RUST_LOG overrides this)"
    )]
    pub log_level: LogLevel,
}

/// Available diagnostic log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `tracing` filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.input_file, None);
        assert_eq!(parsed.bank_name, "AwesomeGIC Bank");
        assert_eq!(parsed.log_level, LogLevel::Warn);
    }

    #[rstest]
    #[case::input_file(&["program", "--input", "session.txt"], Some("session.txt"), "AwesomeGIC Bank")]
    #[case::bank_name(&["program", "--bank-name", "Rusty Savings"], None, "Rusty Savings")]
    #[case::all_options(
        &["program", "--input", "s.txt", "--bank-name", "Rusty Savings", "--log-level", "debug"],
        Some("s.txt"),
        "Rusty Savings"
    )]
    fn test_options(
        #[case] args: &[&str],
        #[case] input_file: Option<&str>,
        #[case] bank_name: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, input_file.map(PathBuf::from));
        assert_eq!(parsed.bank_name, bank_name);
    }

    #[rstest]
    #[case::error("error", LogLevel::Error, "error")]
    #[case::info("info", LogLevel::Info, "info")]
    #[case::trace("trace", LogLevel::Trace, "trace")]
    fn test_log_level_parsing(
        #[case] value: &str,
        #[case] expected: LogLevel,
        #[case] filter: &str,
    ) {
        let parsed = CliArgs::try_parse_from(["program", "--log-level", value]).unwrap();
        assert_eq!(parsed.log_level, expected);
        assert_eq!(parsed.log_level.as_filter(), filter);
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_log_level(&["program", "--log-level", "loud"])]
    #[case::missing_input_value(&["program", "--input"])]
    #[case::unexpected_positional(&["program", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
