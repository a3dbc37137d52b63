// src/core/scanner/dns_scanner.rs

use crate::core::scanner::seed::Seed;
use std::net::Ipv4Addr;

const TTL_SECONDS: u32 = 3600;

/// Fabricated DNS data for the target, rendered to text by [`render_dns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResults {
    pub domain: String,
    pub address: Ipv4Addr,
    /// `(host, priority)`
    pub mx: Vec<(String, u16)>,
    pub ns: Vec<String>,
    pub ttl: u32,
}

/// A private-looking IPv4 address whose octets all come from the seed.
pub fn synthetic_address(seed: Seed) -> Ipv4Addr {
    let s = seed.value();
    Ipv4Addr::new(
        (192 + s % 32) as u8,
        (168 + s % 32) as u8,
        (s % 256) as u8,
        (1 + s % 254) as u8,
    )
}

/// The label the name servers are named after: the second label of the host,
/// or the only one for single-label hosts such as `localhost`.
fn nameserver_label(domain: &str) -> &str {
    let mut labels = domain.split('.');
    let first = labels.next().unwrap_or(domain);
    labels.next().unwrap_or(first)
}

pub fn lookup_records(seed: Seed, domain: &str) -> DnsResults {
    let label = nameserver_label(domain);
    DnsResults {
        domain: domain.to_string(),
        address: synthetic_address(seed),
        mx: vec![(format!("mail.{domain}"), 10), (format!("mail2.{domain}"), 20)],
        ns: vec![format!("ns1.{label}.com"), format!("ns2.{label}.com")],
        ttl: TTL_SECONDS,
    }
}

pub fn render_dns(results: &DnsResults) -> String {
    let mut lines = vec![
        format!("Domain: {}", results.domain),
        format!("IP Address: {}", results.address),
        format!("A Record: {} -> {}", results.domain, results.address),
        "MX Records:".to_string(),
    ];
    lines.extend(results.mx.iter().map(|(host, priority)| format!("  - {host} (Priority: {priority})")));
    lines.push("NS Records:".to_string());
    lines.extend(results.ns.iter().map(|ns| format!("  - {ns}")));
    lines.push(format!("TTL: {} seconds", results.ttl));
    lines.join("\n")
}

pub fn synthesize_dns(seed: Seed, domain: &str) -> String {
    render_dns(&lookup_records(seed, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_com_block() {
        let block = synthesize_dns(Seed::from_domain("example.com"), "example.com");
        let expected = "\
Domain: example.com
IP Address: 195.171.3.184
A Record: example.com -> 195.171.3.184
MX Records:
  - mail.example.com (Priority: 10)
  - mail2.example.com (Priority: 20)
NS Records:
  - ns1.com.com
  - ns2.com.com
TTL: 3600 seconds";
        assert_eq!(block, expected);
    }

    #[test]
    fn second_label_names_the_nameservers() {
        let records = lookup_records(Seed::from_domain("www.example.com"), "www.example.com");
        assert_eq!(records.ns, vec!["ns1.example.com", "ns2.example.com"]);
    }

    #[test]
    fn single_label_host_reuses_its_label() {
        let records = lookup_records(Seed::from_domain("localhost"), "localhost");
        assert_eq!(records.ns[0], "ns1.localhost.com");
    }

    #[test]
    fn octets_stay_in_range_for_large_seeds() {
        let address = synthetic_address(Seed::from_domain("github.com"));
        assert_eq!(address, Ipv4Addr::new(214, 190, 246, 173));
        assert_eq!(synthetic_address(Seed::from_domain("")), Ipv4Addr::new(192, 168, 0, 1));
    }
}
