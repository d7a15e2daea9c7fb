// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use customer_importer_domain::RecordLayout;

use super::{parsers::DelimiterArg, value_enum::CliReportOrder};

/// Top-level CLI arguments parsed via clap.
///
/// Both positionals are optional at the clap level so that a bare invocation
/// prints the usage line and exits cleanly instead of failing.
#[derive(Parser, Debug)]
#[command(
    name = "customer_importer",
    version = crate::VERSION,
    about = "Count email domains in a customer CSV export",
    long_about = "Reads a customer CSV export (first line is a header), takes the email column \
                  of every record and writes one \"<domain>: <count>\" line per distinct domain, \
                  sorted by domain."
)]
pub struct Args {
    /// Customer CSV file to read
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Report destination; `-` prints to standard output
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Zero-based index of the email column
    #[arg(long, default_value_t = RecordLayout::DEFAULT_EMAIL_COLUMN, help_heading = "Input")]
    pub column: usize,

    /// Field separator (single character, or `tab`)
    #[arg(long, default_value = ",", help_heading = "Input")]
    pub delimiter: DelimiterArg,

    /// Report ordering
    #[arg(long, value_enum, default_value_t = CliReportOrder::Domain, help_heading = "Output")]
    pub order: CliReportOrder,

    /// Do not print the completion message
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,
}
