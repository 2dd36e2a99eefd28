//! Command-line parsing for the curious-fraction search.
//!
//! Every option has a default, so a bare `curious` prints the text report.

use clap::{ArgAction, Parser};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "curious",
    version,
    about = "Find the two-digit digit-cancelling fractions and the denominator of their product"
)]
pub struct Cli {
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    ///
    /// `CURIOUS_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_text_report() {
        let cli = Cli::try_parse_from(["curious"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn format_and_verbosity_parse() {
        let cli = Cli::try_parse_from(["curious", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["curious", "--format", "xml"]).is_err());
    }
}
