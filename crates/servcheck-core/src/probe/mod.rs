//! Synchronous HTTP HEAD probing.
//!
//! Uses the curl crate (libcurl) to issue a single HEAD request and report
//! the response status code. One socket per call, no retries; transport
//! failures come back as the curl error for the caller to classify.

pub mod classify;

use std::time::Duration;

/// Transport knobs for one probe. The config file carries the serde twin of
/// this struct; see `CheckConfig::probe_options`.
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout (connect plus response).
    pub timeout: Duration,
    /// Follow redirects and report the final status instead of the 3xx.
    pub follow_redirects: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            follow_redirects: false,
        }
    }
}

/// Sends one blocking HEAD request and returns the HTTP status code.
pub fn head_status(url: &str, opts: &ProbeOptions) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(opts.follow_redirects)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.perform()?;
    easy.response_code()
}
