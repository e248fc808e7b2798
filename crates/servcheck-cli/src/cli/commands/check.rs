//! `servcheck check <url>` – one availability check.

use anyhow::Result;
use servcheck_core::check::{self, Availability};
use servcheck_core::probe::ProbeOptions;
use std::process::ExitCode;

/// Exit codes: 0 up, 1 down, 2 unreachable.
fn exit_code(availability: &Availability) -> u8 {
    match availability {
        Availability::Up { .. } => 0,
        Availability::Down { .. } => 1,
        Availability::Unreachable { .. } => 2,
    }
}

/// Run one check and print the result as text or JSON (or nothing).
pub fn run_check(url: &str, opts: &ProbeOptions, json: bool, quiet: bool) -> Result<ExitCode> {
    let report = check::check_url(url, opts);
    tracing::info!("checked {}: {}", report.url, report.availability);

    if !quiet {
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "{}: {} [{} ms]",
                report.url, report.availability, report.elapsed_ms
            );
        }
    }

    Ok(ExitCode::from(exit_code(&report.availability)))
}
