//! Command line entry point for the Recreation.gov availability checker.
//!
//! Exits with 0 when availability was found and 1 when it was not, so the
//! binary can drive cron jobs and notification scripts.

mod args;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use args::{Args, ArgsError};
use availability_scan::{CheckMode, Scanner};
use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug};
use rec_gov::{ClientConfig, RecGovClient};

const EXIT_NO_AVAILABILITY: u8 = 1;
/// sysexits EX_SOFTWARE, kept apart from the "nothing found" code
const EXIT_RUNTIME_ERROR: u8 = 70;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("rec_check", level)
        .filter_module("rec_gov", level)
        .filter_module("availability_scan", level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp(),
                std::process::id(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn usage_error(err: ArgsError) -> ! {
    Args::command().error(err.kind(), err).exit()
}

async fn run(site_ids: &[u64], mode: &CheckMode, log_level: LevelFilter) -> anyhow::Result<bool> {
    let config = ClientConfig::new(log_level);
    debug!("Using User-Agent: {}", config.user_agent);

    let client = RecGovClient::new(config).context("Failed to create Recreation.gov client")?;
    let scanner = Scanner::new(client);

    let report = scanner
        .run(site_ids, mode)
        .await
        .context("Availability check failed")?;

    print!("{}", report);
    io::stdout().flush()?;

    Ok(report.has_availability())
}

/// Map the outcome of a run to the process exit status.
///
/// Runtime failures print `Something went wrong` to `out` and the error chain to stderr.
fn exit_status(result: anyhow::Result<bool>, out: &mut impl Write) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => EXIT_NO_AVAILABILITY,
        Err(e) => {
            let _ = writeln!(out, "Something went wrong");
            let _ = out.flush();
            eprintln!("Error: {:?}", e);
            EXIT_RUNTIME_ERROR
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_logger(log_level);

    let mode = args.check_mode().unwrap_or_else(|e| usage_error(e));
    let site_ids = match args.resolve_site_ids(io::stdin().lock()) {
        Ok(site_ids) => site_ids,
        Err(e) if e.is_usage_error() => usage_error(e),
        Err(e) => return ExitCode::from(exit_status(Err(e.into()), &mut io::stdout())),
    };

    let result = run(&site_ids, &mode, log_level).await;
    ExitCode::from(exit_status(result, &mut io::stdout()))
}
