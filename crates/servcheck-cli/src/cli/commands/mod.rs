//! CLI command handlers, one file per command.

mod check;

pub use check::run_check;
