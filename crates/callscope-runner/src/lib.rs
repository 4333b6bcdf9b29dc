//! Command-line front end for the callscope collector.
//!
//! The contract with callers is strict: exactly one JSON object on stdout
//! per invocation, exit code 0 on success and 1 on any failure. All
//! diagnostics go to stderr through `tracing` so stdout stays parseable.

use std::process::ExitCode;

use anyhow::Result;
use callscope_lib::ami::{AmiManager, DEFAULT_AMI_USER};
use callscope_lib::cdr::CdrCollector;
use callscope_lib::recordings::RecordingCollector;
use callscope_lib::sysinfo::SystemInfoCollector;
use callscope_lib::CollectorError;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use callscope_types::{stamped, ErrorCode, FailureReport};

const USAGE_HINT: &str = "callscope {info|cdr|recordings|setup-ami|check-ami}";

/// Asterisk data collector emitting JSON reports.
#[derive(Parser, Debug)]
#[command(name = "callscope", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report system and Asterisk installation details.
    Info,
    /// Read call detail records, newest first.
    Cdr {
        /// Day window; accepted for interface symmetry, filtering is
        /// performed by the consuming client.
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Maximum number of records to return.
        #[arg(long, default_value_t = 1000)]
        limit: usize,
    },
    /// List recording files modified within the last N days.
    Recordings {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Enable the management interface and install a credential section.
    SetupAmi {
        /// Credential section name.
        #[arg(long = "user", default_value = DEFAULT_AMI_USER)]
        user: String,
        /// Secret to install; a random one is generated when omitted.
        #[arg(long = "pass")]
        pass: Option<String>,
    },
    /// Report whether the management interface is enabled and provisioned.
    CheckAmi,
}

/// Parses the command line, runs the command, prints the report.
pub fn run() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    match execute(cli.command) {
        Ok(report) => {
            emit(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            emit(&stamped(&failure_report(&err)));
            ExitCode::FAILURE
        }
    }
}

/// Dispatches one subcommand and returns its stamped JSON report.
pub fn execute(command: Command) -> Result<Value> {
    debug!(?command, "executing");
    match command {
        Command::Info => Ok(stamped(&SystemInfoCollector::collect())),
        Command::Cdr { days, limit } => {
            Ok(stamped(&CdrCollector::discover().collect(days, limit)?))
        }
        Command::Recordings { days } => {
            Ok(stamped(&RecordingCollector::discover().collect(days)?))
        }
        Command::SetupAmi { user, pass } => {
            Ok(stamped(&AmiManager::discover().setup(&user, pass)?))
        }
        Command::CheckAmi => Ok(stamped(&AmiManager::discover().check(DEFAULT_AMI_USER)?)),
    }
}

/// Maps any execution error onto the failure envelope. Typed collector
/// errors keep their code and hint; everything else is internal.
pub fn failure_report(err: &anyhow::Error) -> FailureReport {
    match err.downcast_ref::<CollectorError>() {
        Some(collector_err) => collector_err.report(),
        None => FailureReport::new(err.to_string(), ErrorCode::InternalError, None),
    }
}

/// Converts clap's parse failures into the JSON contract. Help and
/// version requests keep clap's native rendering and exit code.
fn report_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let report = FailureReport::new(
                "No command specified",
                ErrorCode::UnknownCommand,
                Some(USAGE_HINT.to_string()),
            );
            emit(&stamped(&report));
            ExitCode::FAILURE
        }
        kind => {
            let code = match kind {
                ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
                    ErrorCode::UnknownCommand
                }
                _ => ErrorCode::InternalError,
            };
            let message = err
                .to_string()
                .lines()
                .next()
                .unwrap_or("invalid command line")
                .trim()
                .to_string();
            let report = FailureReport::new(message, code, Some(USAGE_HINT.to_string()));
            emit(&stamped(&report));
            ExitCode::FAILURE
        }
    }
}

fn emit(value: &Value) {
    // Value's alternate Display is pretty-printed JSON.
    println!("{value:#}");
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdr_defaults() {
        let cli = Cli::try_parse_from(["callscope", "cdr"]).unwrap();
        match cli.command {
            Command::Cdr { days, limit } => {
                assert_eq!(days, 7);
                assert_eq!(limit, 1000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cdr_flags_are_parsed() {
        let cli =
            Cli::try_parse_from(["callscope", "cdr", "--days", "30", "--limit", "50"]).unwrap();
        match cli.command {
            Command::Cdr { days, limit } => {
                assert_eq!(days, 30);
                assert_eq!(limit, 50);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_setup_ami_defaults_to_collector_user() {
        let cli = Cli::try_parse_from(["callscope", "setup-ami"]).unwrap();
        match cli.command {
            Command::SetupAmi { user, pass } => {
                assert_eq!(user, DEFAULT_AMI_USER);
                assert!(pass.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_a_parse_error() {
        let err = Cli::try_parse_from(["callscope", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_collector_errors_keep_their_code() {
        let err = anyhow::Error::new(CollectorError::CdrFileNotFound);
        let report = failure_report(&err);
        assert_eq!(report.error_code, ErrorCode::FileNotFound);
        assert!(report.hint.is_some());
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = anyhow::anyhow!("something odd");
        let report = failure_report(&err);
        assert_eq!(report.error_code, ErrorCode::InternalError);
        assert_eq!(report.error, "something odd");
    }
}
