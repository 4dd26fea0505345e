//! Command-line interface using clap

use clap::Parser;
use std::path::PathBuf;

use crate::config::CalculatorConfig;
use crate::core::{Accumulator, Input};

/// padcalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "padcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the history panel open
    #[arg(long)]
    pub history: bool,

    /// Print the session history to stdout on exit
    #[arg(long)]
    pub print_history: bool,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Write log records as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Evaluate an expression without starting the TUI
    #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
    pub eval: Option<String>,
}

impl Cli {
    /// Builds the runtime configuration from parsed arguments
    #[must_use]
    pub fn to_config(&self) -> CalculatorConfig {
        CalculatorConfig::new()
            .with_show_history(self.history)
            .with_print_history(self.print_history)
            .with_log_file(self.log_file.clone())
            .with_log_level(self.log_level.clone())
            .with_log_json(self.log_json)
    }
}

/// Types `expr` into a fresh accumulator, one character per key, then
/// evaluates unless the expression already ended with `=`.
#[must_use]
pub fn eval_expression(expr: &str) -> Accumulator {
    let mut accumulator = Accumulator::new();
    let mut last = None;
    for input in expr.chars().filter_map(Input::from_char) {
        accumulator.apply(input);
        last = Some(input);
    }
    if last != Some(Input::Evaluate) {
        accumulator.evaluate();
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_SENTINEL;

    // ===== Argument parsing tests =====

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["padcalc"]).unwrap();
        assert!(!cli.history);
        assert!(!cli.print_history);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, "info");
        assert!(cli.eval.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "padcalc",
            "--history",
            "--print-history",
            "--log-file",
            "/tmp/padcalc.log",
            "--log-level",
            "debug",
            "--log-json",
        ])
        .unwrap();
        let config = cli.to_config();
        assert!(config.show_history);
        assert!(config.print_history);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/padcalc.log")));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    fn test_parse_eval_short_and_long() {
        let cli = Cli::try_parse_from(["padcalc", "-e", "3+4"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("3+4"));
        let cli = Cli::try_parse_from(["padcalc", "--eval", "-2*3"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("-2*3"));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(Cli::try_parse_from(["padcalc", "--bogus"]).is_err());
    }

    // ===== eval_expression tests =====

    #[test]
    fn test_eval_expression_simple() {
        assert_eq!(eval_expression("3+4").display(), "7");
        assert_eq!(eval_expression("10 / 4").display(), "2.50");
    }

    #[test]
    fn test_eval_expression_trailing_equals_not_repeated() {
        let acc = eval_expression("3+4=");
        assert_eq!(acc.display(), "7");
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn test_eval_expression_chained() {
        let acc = eval_expression("2+3=*4");
        assert_eq!(acc.display(), "20");
        assert_eq!(acc.history().export_formatted(), "2 + 3 = 5\n5 * 4 = 20");
    }

    #[test]
    fn test_eval_expression_errors() {
        assert_eq!(eval_expression("1/0").display(), ERROR_SENTINEL);
        assert_eq!(eval_expression("").display(), ERROR_SENTINEL);
        assert_eq!(eval_expression("5+").display(), ERROR_SENTINEL);
    }

    #[test]
    fn test_eval_expression_ignores_unmapped() {
        assert_eq!(eval_expression("(2+2)").display(), "4");
    }
}
