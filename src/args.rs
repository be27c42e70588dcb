use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

use crate::record::parse_date;

#[derive(Parser, Debug)]
#[command(
    name = "cookiee",
    about = "Find the most active cookies for a day in a cookie log",
    version,
    long_about = "Find the most active cookies for a day in a cookie log.\n\n\
                  The log holds one `cookie,timestamp` record per line and must be sorted \
                  with the most recent timestamp first; the scan stops at the first record \
                  older than the requested day."
)]
pub struct Args {
    /// Cookie log to scan
    #[arg(short, long, value_name = "FILE", env = "COOKIEE_FILE")]
    pub file: PathBuf,

    /// Day to report on (YYYY-MM-DD)
    #[arg(short, long, value_name = "YYYY-MM-DD", env = "COOKIEE_DATE", value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print scan statistics to stderr after the result
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value.trim()).ok_or_else(|| format!("expected YYYY-MM-DD, got '{}'", value))
}
