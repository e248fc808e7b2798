//! Minimal HTTP/1.1 server answering HEAD requests for availability tests.
//!
//! Serves a fixed status code on the root path and a different one anywhere
//! else, so tests can prove the checker probes the network location only.
//! Optional Location header and a stall mode cover the redirect and timeout
//! paths.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StatusServerOptions {
    /// Status code returned for HEAD on "/".
    pub status: u16,
    /// Optional Location header sent with the root response (for 3xx tests).
    pub location: Option<String>,
    /// Status code returned for HEAD on any other path.
    pub other_path_status: u16,
    /// If true, read the request but never answer (client timeout fires).
    pub stall: bool,
}

impl Default for StatusServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            location: None,
            other_path_status: 404,
            stall: false,
        }
    }
}

/// Starts a server in a background thread answering `status` on "/". Returns
/// the base URL (e.g. "http://127.0.0.1:12345/"). The server runs until the
/// process exits.
pub fn start(status: u16) -> String {
    start_with_options(StatusServerOptions {
        status,
        ..Default::default()
    })
}

/// Like `start` but with full control over the served behavior.
pub fn start_with_options(opts: StatusServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &StatusServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    if opts.stall {
        // Hold the connection open without answering.
        thread::sleep(Duration::from_secs(5));
        return;
    }
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let status = if path == "/" {
        opts.status
    } else {
        opts.other_path_status
    };
    let location = match &opts.location {
        Some(loc) if path == "/" => format!("Location: {}\r\n", loc),
        _ => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\n{}Connection: close\r\n\r\n",
        status,
        reason(status),
        location
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    (method, path)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
