//! CLI for the servcheck availability checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use servcheck_core::config;
use std::process::ExitCode;
use std::time::Duration;

use commands::run_check;

/// Top-level CLI for servcheck.
#[derive(Debug, Parser)]
#[command(name = "servcheck")]
#[command(about = "servcheck: HTTP service availability checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a service URL is reachable (HEAD, status < 400 is up).
    Check {
        /// Service URL to check (http or https).
        url: String,

        /// Whole-request timeout in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,

        /// TCP connect timeout in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        connect_timeout_secs: Option<u64>,

        /// Follow redirects and classify the final status instead of the 3xx.
        #[arg(long)]
        follow_redirects: bool,

        /// Print the result as one JSON object instead of text.
        #[arg(long)]
        json: bool,

        /// Print nothing; the exit code carries the result.
        #[arg(long, short)]
        quiet: bool,
    },
}

impl CliCommand {
    /// Parse arguments and dispatch. The returned exit code is 0 for up,
    /// 1 for down, 2 for unreachable (3 is reserved for internal errors).
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                url,
                timeout_secs,
                connect_timeout_secs,
                follow_redirects,
                json,
                quiet,
            } => {
                let mut opts = cfg.probe_options();
                if let Some(secs) = timeout_secs {
                    opts.timeout = Duration::from_secs(secs);
                }
                if let Some(secs) = connect_timeout_secs {
                    opts.connect_timeout = Duration::from_secs(secs);
                }
                if follow_redirects {
                    opts.follow_redirects = true;
                }
                run_check(&url, &opts, json, quiet)
            }
        }
    }
}

#[cfg(test)]
mod tests;
