pub mod config;
pub mod logging;

// Checker modules
pub mod check;
pub mod endpoint;
pub mod probe;
