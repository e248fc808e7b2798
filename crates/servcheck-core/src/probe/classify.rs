//! Classify curl transport errors into distinct unreachable kinds.

use serde::Serialize;
use std::fmt;

/// Why a host never produced an HTTP status.
///
/// A checker reports one of these instead of propagating the transport fault:
/// bad URLs, DNS failures, refused connections, and timeouts each get their
/// own kind so callers can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachableKind {
    /// The service URL did not name a probeable http/https endpoint.
    MalformedUrl,
    /// The host name did not resolve.
    DnsFailure,
    /// TCP connect failed (refused, or no route).
    ConnectionRefused,
    /// Connect or whole-request deadline hit.
    Timeout,
    /// Any other transport failure.
    Other,
}

impl fmt::Display for UnreachableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnreachableKind::MalformedUrl => "malformed URL",
            UnreachableKind::DnsFailure => "DNS resolution failure",
            UnreachableKind::ConnectionRefused => "connection refused",
            UnreachableKind::Timeout => "timeout",
            UnreachableKind::Other => "network error",
        };
        f.write_str(s)
    }
}

/// Classify a curl error into an unreachable kind.
pub fn classify_curl_error(e: &curl::Error) -> UnreachableKind {
    if e.is_operation_timedout() {
        return UnreachableKind::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return UnreachableKind::DnsFailure;
    }
    if e.is_couldnt_connect() {
        return UnreachableKind::ConnectionRefused;
    }
    if e.is_url_malformed() {
        return UnreachableKind::MalformedUrl;
    }
    UnreachableKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    // Raw libcurl codes: CURLE_URL_MALFORMAT = 3, CURLE_COULDNT_RESOLVE_HOST = 6,
    // CURLE_COULDNT_CONNECT = 7, CURLE_OPERATION_TIMEDOUT = 28.

    #[test]
    fn timeout_code() {
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), UnreachableKind::Timeout);
    }

    #[test]
    fn dns_code() {
        let e = curl::Error::new(6);
        assert_eq!(classify_curl_error(&e), UnreachableKind::DnsFailure);
    }

    #[test]
    fn connect_code() {
        let e = curl::Error::new(7);
        assert_eq!(classify_curl_error(&e), UnreachableKind::ConnectionRefused);
    }

    #[test]
    fn malformed_url_code() {
        let e = curl::Error::new(3);
        assert_eq!(classify_curl_error(&e), UnreachableKind::MalformedUrl);
    }

    #[test]
    fn unknown_code_is_other() {
        // CURLE_SSL_CONNECT_ERROR
        let e = curl::Error::new(35);
        assert_eq!(classify_curl_error(&e), UnreachableKind::Other);
    }

    #[test]
    fn display_names() {
        assert_eq!(UnreachableKind::ConnectionRefused.to_string(), "connection refused");
        assert_eq!(UnreachableKind::DnsFailure.to_string(), "DNS resolution failure");
    }
}
