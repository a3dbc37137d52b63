// src/core/scanner/headers_scanner.rs

use crate::core::scanner::fingerprint_scanner::ServerSoftware;
use crate::core::scanner::seed::Seed;
use chrono::DateTime;
use std::fmt::Write;
use tracing::debug;

/// 2024-01-01T00:00:00Z. Synthetic response dates fall within the year after it.
const RESPONSE_DATE_EPOCH: i64 = 1_704_067_200;
const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

const STATUS_LINE: &str = "HTTP/1.1 200 OK";
const CSP_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' https://cdn.example.com;";

/// A single synthetic response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderData {
    pub name: &'static str,
    pub value: String,
}

impl HeaderData {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }
}

/// Whether the synthetic target sets a Content-Security-Policy.
pub fn sends_csp(seed: Seed) -> bool {
    seed.value() % 5 == 0
}

/// The `Date` header value. Derived from the seed so the block is reproducible.
fn response_date(seed: Seed) -> String {
    let offset = (seed.value() as u64 % SECONDS_PER_YEAR) as i64;
    DateTime::from_timestamp(RESPONSE_DATE_EPOCH + offset, 0)
        .unwrap_or_default()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Builds the ordered header list of the synthetic response.
pub fn collect_headers(seed: Seed, server: &ServerSoftware) -> Vec<HeaderData> {
    let mut headers = vec![
        HeaderData::new("Date", response_date(seed)),
        HeaderData::new("Server", server.to_string()),
        HeaderData::new("Content-Type", "text/html; charset=UTF-8"),
        HeaderData::new("Cache-Control", "no-cache, no-store, must-revalidate"),
        HeaderData::new("Pragma", "no-cache"),
        HeaderData::new("Expires", "0"),
        HeaderData::new("X-Frame-Options", "SAMEORIGIN"),
        HeaderData::new("X-Content-Type-Options", "nosniff"),
        HeaderData::new("Referrer-Policy", "strict-origin-when-cross-origin"),
    ];

    if sends_csp(seed) {
        debug!(%seed, "Synthetic response carries a CSP header.");
        headers.push(HeaderData::new("Content-Security-Policy", CSP_POLICY));
    }

    headers
}

/// Renders the raw response head, one `\n`-terminated line per header.
pub fn render_headers(headers: &[HeaderData]) -> String {
    let mut block = format!("{STATUS_LINE}\n");
    for header in headers {
        // Writing into a String cannot fail.
        let _ = writeln!(block, "{}: {}", header.name, header.value);
    }
    block
}

pub fn synthesize_headers(seed: Seed, server: &ServerSoftware) -> String {
    render_headers(&collect_headers(seed, server))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iis() -> ServerSoftware {
        ServerSoftware { product: "Microsoft-IIS", version: "10.9".into() }
    }

    #[test]
    fn block_starts_with_status_line_and_carries_security_headers() {
        let block = synthesize_headers(Seed::from_domain("example.com"), &iis());
        let mut lines = block.lines();
        assert_eq!(lines.next(), Some("HTTP/1.1 200 OK"));
        assert!(block.contains("Server: Microsoft-IIS/10.9\n"));
        assert!(block.contains("X-Frame-Options: SAMEORIGIN\n"));
        assert!(block.contains("X-Content-Type-Options: nosniff\n"));
        assert!(block.contains("Referrer-Policy: strict-origin-when-cross-origin\n"));
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn csp_only_when_seed_divisible_by_five() {
        let zero = synthesize_headers(Seed::from_domain(""), &iis());
        assert!(zero.contains("Content-Security-Policy: default-src 'self';"));

        let example = synthesize_headers(Seed::from_domain("example.com"), &iis());
        assert!(!example.contains("Content-Security-Policy"));
    }

    #[test]
    fn date_is_reproducible_http_date() {
        assert_eq!(response_date(Seed::from_domain("")), "Mon, 01 Jan 2024 00:00:00 GMT");
        let seed = Seed::from_domain("example.com");
        assert_eq!(response_date(seed), response_date(seed));
        assert!(response_date(seed).ends_with(" GMT"));
    }
}
