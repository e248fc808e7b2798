//! Network location extraction.
//!
//! A service URL is normalised down to `(scheme, host, port)` plus the root
//! URL that the probe actually requests. The path, query, and fragment of the
//! service URL play no part in an availability check.

use thiserror::Error;
use url::Url;

/// Why a service URL could not be turned into a probeable endpoint.
///
/// All of these map to the malformed-URL outcome at the checker level; the
/// distinct variants exist so logs and callers can tell what was wrong.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The string did not parse as a URL at all.
    #[error("invalid URL `{url}`: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Parsed, but there is no host component (e.g. `mailto:` URLs).
    #[error("URL has no host: {0}")]
    MissingHost(String),
    /// Only http and https services can be probed.
    #[error("unsupported URL scheme `{scheme}` in {url}")]
    UnsupportedScheme { scheme: String, url: String },
    /// No explicit port and no known default for the scheme.
    #[error("URL missing port and unknown default: {0}")]
    MissingPort(String),
}

/// The network location of a service: scheme, host, and resolved port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    root_url: String,
}

impl Endpoint {
    /// Extracts the network location from a service URL.
    ///
    /// The port falls back to the scheme default (80/443) when the URL does
    /// not carry one. Schemes other than http/https are rejected: the checker
    /// speaks HTTP only and silently probing something else would be a lie.
    pub fn from_url(service_url: &str) -> Result<Self, EndpointError> {
        let parsed = Url::parse(service_url).map_err(|source| EndpointError::Parse {
            url: service_url.to_string(),
            source,
        })?;

        let host = parsed
            .host_str()
            .ok_or_else(|| EndpointError::MissingHost(service_url.to_string()))?
            .to_string();

        let scheme = parsed.scheme().to_string();
        if !matches!(scheme.as_str(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme {
                scheme,
                url: service_url.to_string(),
            });
        }

        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| EndpointError::MissingPort(service_url.to_string()))?;

        // Same scheme and authority, path forced to "/", query and fragment
        // dropped. Rebuilding through Url keeps IPv6 brackets and port
        // elision correct.
        let mut root = parsed;
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);

        Ok(Self {
            scheme,
            host,
            port,
            root_url: root.to_string(),
        })
    }

    /// The URL the probe requests: root path on this network location.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// `host:port` form for display and logs.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
