use std::io::BufRead;

use availability_scan::{CheckMode, DateWindow};
use chrono::NaiveDate;
use clap::Parser;
use clap::error::ErrorKind;
use rec_gov::INPUT_DATE_FORMAT;

#[derive(Parser, Debug)]
#[command(
    name = "rec-check",
    about = "Check Recreation.gov campgrounds or timed-entry facilities for availability",
    version,
    long_about = None
)]
pub struct Args {
    /// Debug log level, including raw API payloads
    #[arg(short, long)]
    pub debug: bool,

    /// Timed entry ticket mode
    #[arg(short, long)]
    pub timed_entry: bool,

    /// Start date [YYYY-MM-DD]
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// End date [YYYY-MM-DD]. You expect to leave this day, not stay the night.
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Date [YYYY-MM-DD]
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Read list of Recreation.gov site ID(s) from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Recreation.gov campground/facility ID(s)
    #[arg(value_name = "SITE_ID")]
    pub site_ids: Vec<u64>,
}

/// Argument combinations clap cannot express on its own
#[derive(thiserror::Error, Debug)]
pub enum ArgsError {
    #[error("{0}")]
    MissingRequiredArgument(&'static str),

    #[error("--end-date {end} must be after --start-date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Not a valid site ID: '{0}'.")]
    InvalidSiteId(String),

    #[error("Failed to read site IDs from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

impl ArgsError {
    /// clap error kind used when reporting this as a usage error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgsError::MissingRequiredArgument(_) => ErrorKind::MissingRequiredArgument,
            ArgsError::InvalidDateRange { .. } | ArgsError::InvalidSiteId(_) => {
                ErrorKind::ValueValidation
            }
            ArgsError::Stdin(_) => ErrorKind::Io,
        }
    }

    /// Whether this is a mistake on the command line rather than a failure to read input
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, ArgsError::Stdin(_))
    }
}

impl Args {
    /// Resolve the mode of the run from the date flags
    pub fn check_mode(&self) -> Result<CheckMode, ArgsError> {
        if self.timed_entry {
            let date = self.date.ok_or(ArgsError::MissingRequiredArgument(
                "--date argument required in timed entry mode",
            ))?;
            return Ok(CheckMode::TimedEntry(date));
        }

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => DateWindow::new(start, end)
                .map(CheckMode::Campground)
                .map_err(|_| ArgsError::InvalidDateRange { start, end }),
            _ => Err(ArgsError::MissingRequiredArgument(
                "--start-date and --end-date arguments required",
            )),
        }
    }

    /// Site ids from the command line, or from `input` when none were given or `--stdin` is set
    pub fn resolve_site_ids(&self, input: impl BufRead) -> Result<Vec<u64>, ArgsError> {
        let mut site_ids = self.site_ids.clone();
        if self.stdin || site_ids.is_empty() {
            site_ids.extend(read_site_ids(input)?);
        }
        Ok(site_ids)
    }
}

/// One id per line; surrounding whitespace and blank lines are ignored
pub fn read_site_ids(input: impl BufRead) -> Result<Vec<u64>, ArgsError> {
    let mut site_ids = Vec::new();
    for line in input.lines() {
        let line = line?;
        let id = line.trim();
        if id.is_empty() {
            continue;
        }
        let parsed = id
            .parse()
            .map_err(|_| ArgsError::InvalidSiteId(id.to_string()))?;
        site_ids.push(parsed);
    }
    Ok(site_ids)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).map_err(|_| format!("Not a valid date: '{}'.", s))
}
