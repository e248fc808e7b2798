//! The availability check: HEAD the network location, classify the status.
//!
//! A status below 400 means the host is up. Transport failures never
//! propagate out of this module; they map to `Availability::Unreachable`
//! with a distinct kind.

use serde::Serialize;
use std::fmt;
use std::time::Instant;

use crate::endpoint::Endpoint;
use crate::probe::classify::{classify_curl_error, UnreachableKind};
use crate::probe::{self, ProbeOptions};

/// Statuses at or above this are "down" (4xx client errors, 5xx server errors).
const DOWN_THRESHOLD: u32 = 400;

/// Outcome of one availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Availability {
    /// Host answered with a status below 400. Redirect statuses count as up
    /// when redirects are not being followed.
    Up { status: u32 },
    /// Host answered, but with a client or server error status.
    Down { status: u32 },
    /// No HTTP status at all: bad URL, DNS, connect failure, or timeout.
    Unreachable { kind: UnreachableKind },
}

impl Availability {
    /// Classify an HTTP status code.
    pub fn from_status(status: u32) -> Self {
        if status < DOWN_THRESHOLD {
            Availability::Up { status }
        } else {
            Availability::Down { status }
        }
    }

    /// True only when the host answered with a status below 400.
    pub fn is_up(&self) -> bool {
        matches!(self, Availability::Up { .. })
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Up { status } => write!(f, "up (HTTP {})", status),
            Availability::Down { status } => write!(f, "down (HTTP {})", status),
            Availability::Unreachable { kind } => write!(f, "unreachable ({})", kind),
        }
    }
}

/// One finished check, ready for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// The URL as given to the checker.
    pub url: String,
    #[serde(flatten)]
    pub availability: Availability,
    /// Wall time spent on the probe attempt, in milliseconds.
    pub elapsed_ms: u64,
}

/// Checks a single endpoint: HEAD its root URL and classify the result.
pub fn check_server(endpoint: &Endpoint, opts: &ProbeOptions) -> CheckReport {
    let started = Instant::now();
    let availability = match probe::head_status(endpoint.root_url(), opts) {
        Ok(status) => Availability::from_status(status),
        Err(e) => {
            let kind = classify_curl_error(&e);
            tracing::debug!("probe {} failed: {} ({})", endpoint.authority(), e, kind);
            Availability::Unreachable { kind }
        }
    };
    CheckReport {
        url: endpoint.root_url().to_string(),
        availability,
        elapsed_ms: started.elapsed().as_millis() as u64,
    }
}

/// Checks whether the given service URL is reachable.
///
/// Total function: a URL that does not name a probeable http/https endpoint
/// is reported as unreachable with the malformed-URL kind rather than as an
/// error.
pub fn check_url(service_url: &str, opts: &ProbeOptions) -> CheckReport {
    match Endpoint::from_url(service_url) {
        Ok(endpoint) => {
            let mut report = check_server(&endpoint, opts);
            report.url = service_url.to_string();
            report
        }
        Err(e) => {
            tracing::debug!("rejected service URL: {}", e);
            CheckReport {
                url: service_url.to_string(),
                availability: Availability::Unreachable {
                    kind: UnreachableKind::MalformedUrl,
                },
                elapsed_ms: 0,
            }
        }
    }
}

/// Boolean form of `check_url` with default options: true iff the host is up.
///
/// Unreachable collapses to false here. Callers that need to tell "responded
/// with an error" from "never responded" should use `check_url`.
pub fn check_availability(service_url: &str) -> bool {
    check_url(service_url, &ProbeOptions::default())
        .availability
        .is_up()
}
