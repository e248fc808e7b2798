use servcheck_core::logging;

mod cli;

use crate::cli::CliCommand;
use std::process::ExitCode;

fn main() -> ExitCode {
    // File logging first; fall back to stderr so a bad state dir never
    // prevents a check.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("servcheck error: {:#}", err);
            ExitCode::from(3)
        }
    }
}
