// src/core/scanner/mod.rs

// Each submodule derives one slice of the report from the domain seed.
pub mod dns_scanner;
pub mod fingerprint_scanner;
pub mod headers_scanner;
pub mod port_scanner;
pub mod scoring;
pub mod seed;
pub mod vulnerability_scanner;

use crate::core::error::ScanError;
use crate::core::knowledge_base;
use crate::core::models::{ScanReport, TechnicalDetails, Vulnerability};
use chrono::Local;
use rand::Rng;
use tracing::{debug, info};
use url::Url;

use self::dns_scanner::synthesize_dns;
use self::fingerprint_scanner::{detect_technologies, server_software};
use self::headers_scanner::synthesize_headers;
use self::port_scanner::open_ports;
use self::scoring::score;
use self::seed::Seed;
use self::vulnerability_scanner::{select_vulnerabilities, SelectionStrategy};

/// Knobs that change what the generator produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub strategy: SelectionStrategy,
}

/// A URL accepted for scanning, with its hostname extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub url: String,
    pub domain: String,
}

/// Parses an absolute URL and extracts the hostname the seed is computed from.
///
/// The URL must carry a scheme and a host. Bare hosts are the caller's job to
/// normalize (see [`normalize_input`]).
pub fn parse_target(url: &str) -> Result<ScanTarget, ScanError> {
    let invalid = || ScanError::InvalidUrl { input: url.to_string() };
    let parsed = Url::parse(url).map_err(|_| invalid())?;
    let domain = parsed.host_str().ok_or_else(invalid)?;
    Ok(ScanTarget { url: url.to_string(), domain: domain.to_string() })
}

/// Prefixes `https://` onto input that does not start with an http(s) scheme.
///
/// The scheme check ignores ASCII case, so `HTTPS://host` is kept as typed.
pub fn normalize_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed, "http://") || has_scheme(trimmed, "https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn has_scheme(input: &str, scheme: &str) -> bool {
    input.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Synthesizes the technical profile: technologies, header block, ports, DNS block.
pub fn synthesize_profile(seed: Seed, domain: &str) -> TechnicalDetails {
    let technologies = detect_technologies(seed);
    let server = server_software(seed, &technologies);
    TechnicalDetails {
        headers: synthesize_headers(seed, &server),
        technologies,
        ports: open_ports(seed),
        dns: synthesize_dns(seed, domain),
    }
}

/// Produces the full simulated report for `url` with default options.
pub fn generate_report(url: &str) -> Result<ScanReport, ScanError> {
    generate_report_with(url, &GeneratorOptions::default())
}

pub fn generate_report_with(url: &str, options: &GeneratorOptions) -> Result<ScanReport, ScanError> {
    let target = parse_target(url)?;
    let seed = Seed::from_domain(&target.domain);
    info!(domain = %target.domain, %seed, "Generating simulated report.");

    let vulnerabilities: Vec<Vulnerability> = select_vulnerabilities(seed, options.strategy)
        .into_iter()
        .map(Vulnerability::from)
        .collect();
    let card = score(&vulnerabilities);
    let recommendations = knowledge_base::recommend(&vulnerabilities);
    let technical_details = synthesize_profile(seed, &target.domain);

    // Presentation only. Not derived from the seed.
    let scan_date = Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
    let scan_duration = format!("{} seconds", rand::thread_rng().gen_range(15..45));

    debug!(score = card.score, risk = %card.risk, findings = vulnerabilities.len(), "Report assembled.");

    Ok(ScanReport {
        url: target.url,
        scan_date,
        scan_duration,
        security_score: card.score,
        risk_level: card.risk,
        vulnerabilities_summary: card.summary,
        vulnerabilities,
        recommendations,
        technical_details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RiskLevel;

    #[test]
    fn parse_target_extracts_hostname() {
        let target = parse_target("https://www.example.com/path?q=1").unwrap();
        assert_eq!(target.domain, "www.example.com");
        assert_eq!(target.url, "https://www.example.com/path?q=1");
    }

    #[test]
    fn invalid_urls_are_rejected() {
        for input in ["", "not a url", "example.com", "mailto:someone@example.com"] {
            assert_eq!(
                parse_target(input),
                Err(ScanError::InvalidUrl { input: input.to_string() }),
                "{input}"
            );
        }
    }

    #[test]
    fn normalize_adds_https_to_bare_hosts() {
        assert_eq!(normalize_input("example.com"), "https://example.com");
        assert_eq!(normalize_input(" http://example.com "), "http://example.com");
        assert_eq!(normalize_input("https://example.com"), "https://example.com");
    }

    #[test]
    fn normalize_keeps_uppercase_schemes() {
        for input in ["HTTPS://Example.com", "Https://Example.com", "HTTP://example.com/x"] {
            assert_eq!(normalize_input(input), input);
            let target = parse_target(&normalize_input(input)).unwrap();
            assert_eq!(target.domain, "example.com", "{input}");
        }
        // Multi-byte input shorter than a scheme must not split a char.
        assert_eq!(normalize_input("héllo"), "https://héllo");
    }

    #[test]
    fn example_com_golden_report() {
        let report = generate_report("https://example.com").unwrap();
        assert_eq!(report.security_score, 89);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.vulnerabilities_summary.medium, 1);
        assert_eq!(report.vulnerabilities_summary.low, 2);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.recommendations[0].title, "Fix Missing HTTP Strict Transport Security");
        assert!(report.technical_details.headers.contains("Server: Microsoft-IIS/10.9"));
    }

    #[test]
    fn scheme_path_and_query_do_not_affect_the_seed() {
        let a = generate_report("https://example.com").unwrap();
        let b = generate_report("http://example.com/login?next=/").unwrap();
        assert!(a.deterministic_eq(&b));
    }

    #[test]
    fn duration_stays_in_presentation_range() {
        let report = generate_report("https://example.com").unwrap();
        let seconds: u32 = report
            .scan_duration
            .strip_suffix(" seconds")
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!((15..45).contains(&seconds));
    }
}
