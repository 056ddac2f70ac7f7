//! Config
//!
//! Command line and environment settings for the checkout binary.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Arguments for the checkout binary
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "View and check out a shopping cart", long_about = None)]
pub struct CheckoutArgs {
    /// Fixture set to load the catalog, user and cart from
    #[arg(short, long, default_value = "demo")]
    pub fixture: String,

    /// Directory holding fixture sets
    #[arg(long, env = "TROLLEY_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Discount override: "10%", "0.1", "5.00 USD" or "none"
    #[arg(short, long)]
    pub discount: Option<String>,

    /// Also print the cart as a table of line totals
    #[arg(short, long)]
    pub table: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults() -> TestResult {
        let args = CheckoutArgs::try_parse_from(["trolley"])?;

        assert_eq!(args.fixture, "demo");
        assert!(args.discount.is_none());
        assert!(!args.table);
        assert!(matches!(args.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn parses_overrides() -> TestResult {
        let args = CheckoutArgs::try_parse_from([
            "trolley",
            "--fixture",
            "no_discount",
            "--discount",
            "5.00 USD",
            "--table",
            "--log-format",
            "json",
        ])?;

        assert_eq!(args.fixture, "no_discount");
        assert_eq!(args.discount.as_deref(), Some("5.00 USD"));
        assert!(args.table);
        assert!(matches!(args.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
