//! The static, read-only catalogs the synthetic scanner draws from.
//!
//! Selection logic indexes into these tables by position, so the order of every
//! entry is part of the report format: editing a table changes every report
//! generated from it.

use crate::core::models::{
    PortTemplate, Recommendation, RecommendationTemplate, Severity, Vulnerability,
    VulnerabilityTemplate,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The vulnerability catalog. Exactly ten entries.
pub static VULNERABILITIES: [VulnerabilityTemplate; 10] = [
    VulnerabilityTemplate {
        name: "Cross-Site Scripting (XSS)",
        severity: Severity::High,
        description: "The application does not properly sanitize user input before reflecting it in the response, allowing attackers to inject malicious scripts that execute in users' browsers.",
        location: "/search?q=parameter",
        evidence: Some("<script>alert('XSS Vulnerability Found')</script>"),
        cvss: Some("8.2"),
    },
    VulnerabilityTemplate {
        name: "SQL Injection",
        severity: Severity::High,
        description: "The application constructs SQL queries using unsanitized user input, potentially allowing attackers to manipulate database queries and access unauthorized data.",
        location: "/products?id=parameter",
        evidence: Some("id=1' OR '1'='1"),
        cvss: Some("8.5"),
    },
    VulnerabilityTemplate {
        name: "Missing Content Security Policy",
        severity: Severity::Medium,
        description: "The application does not implement a Content Security Policy header, which helps prevent XSS attacks by specifying which dynamic resources are allowed to load.",
        location: "HTTP Headers",
        evidence: None,
        cvss: Some("5.8"),
    },
    VulnerabilityTemplate {
        name: "Insecure Cookie Configuration",
        severity: Severity::Medium,
        description: "Cookies are being set without the 'secure' and 'HttpOnly' flags, which means they could be transmitted over unencrypted connections and accessed by client-side scripts.",
        location: "HTTP Headers",
        evidence: Some("Set-Cookie: sessionid=123456; path=/"),
        cvss: Some("5.4"),
    },
    VulnerabilityTemplate {
        name: "Server Information Disclosure",
        severity: Severity::Low,
        description: "The server is revealing detailed version information in HTTP headers, which could help attackers identify specific vulnerabilities in the server software.",
        location: "HTTP Headers",
        evidence: Some("Server: Apache/2.4.41 (Ubuntu)"),
        cvss: Some("3.7"),
    },
    VulnerabilityTemplate {
        name: "Cross-Site Request Forgery (CSRF)",
        severity: Severity::Medium,
        description: "The application does not implement anti-CSRF tokens, making it vulnerable to cross-site request forgery attacks where unauthorized commands are transmitted from a user the website trusts.",
        location: "/user/profile",
        evidence: None,
        cvss: Some("6.8"),
    },
    VulnerabilityTemplate {
        name: "Outdated TLS Version",
        severity: Severity::Medium,
        description: "The server supports outdated TLS protocols (TLS 1.0/1.1) which have known vulnerabilities and have been deprecated by major browsers.",
        location: "TLS Configuration",
        evidence: None,
        cvss: Some("5.9"),
    },
    VulnerabilityTemplate {
        name: "Open Redirect",
        severity: Severity::Low,
        description: "The application allows redirects to arbitrary external domains, which could be exploited in phishing attacks.",
        location: "/redirect?url=parameter",
        evidence: Some("/redirect?url=https://malicious-site.com"),
        cvss: Some("4.3"),
    },
    VulnerabilityTemplate {
        name: "Insecure CORS Configuration",
        severity: Severity::Medium,
        description: "The application has a permissive CORS policy that allows requests from any origin, potentially enabling cross-origin attacks.",
        location: "HTTP Headers",
        evidence: Some("Access-Control-Allow-Origin: *"),
        cvss: Some("5.5"),
    },
    VulnerabilityTemplate {
        name: "Missing HTTP Strict Transport Security",
        severity: Severity::Low,
        description: "The application does not implement HSTS, which helps protect against protocol downgrade attacks and cookie hijacking.",
        location: "HTTP Headers",
        evidence: None,
        cvss: Some("3.8"),
    },
];

/// The port catalog. Entries 0 and 1 are always reported.
pub static PORTS: [PortTemplate; 10] = [
    PortTemplate { number: 80, service: "HTTP" },
    PortTemplate { number: 443, service: "HTTPS" },
    PortTemplate { number: 22, service: "SSH" },
    PortTemplate { number: 21, service: "FTP" },
    PortTemplate { number: 25, service: "SMTP" },
    PortTemplate { number: 3306, service: "MySQL" },
    PortTemplate { number: 5432, service: "PostgreSQL" },
    PortTemplate { number: 27017, service: "MongoDB" },
    PortTemplate { number: 6379, service: "Redis" },
    PortTemplate { number: 8080, service: "HTTP-Alt" },
];

/// The technology catalog.
pub static TECHNOLOGIES: [&str; 28] = [
    "Apache",
    "Nginx",
    "IIS",
    "Node.js",
    "Express",
    "React",
    "Angular",
    "Vue.js",
    "jQuery",
    "Bootstrap",
    "WordPress",
    "PHP",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Cloudflare",
    "AWS",
    "Azure",
    "GCP",
    "Kubernetes",
    "Docker",
    "Varnish",
    "Memcached",
    "Tomcat",
    "Java",
    "Python",
    "Ruby on Rails",
];

// --- Remediation Knowledge ---

/// Hand-authored remediation advice, keyed by exact vulnerability name.
static RECOMMENDATIONS: &[(&str, RecommendationTemplate)] = &[
    (
        "Cross-Site Scripting (XSS)",
        RecommendationTemplate {
            title: "Implement proper input validation and output encoding",
            description: "Sanitize all user inputs and encode output to prevent XSS attacks. Use context-appropriate encoding when inserting untrusted data into HTML, JavaScript, CSS, or URLs.",
            code: Some(
                "// Example using DOMPurify library
import DOMPurify from 'dompurify';

// Sanitize user input
const userInput = req.body.comment;
const sanitizedInput = DOMPurify.sanitize(userInput);

// Now safe to insert into HTML
document.getElementById('comment').innerHTML = sanitizedInput;",
            ),
            resources: &[
                "OWASP XSS Prevention Cheat Sheet",
                "Content Security Policy (CSP) Implementation Guide",
            ],
        },
    ),
    (
        "SQL Injection",
        RecommendationTemplate {
            title: "Use parameterized queries or prepared statements",
            description: "Never concatenate user input directly into SQL queries. Use parameterized queries, prepared statements, or an ORM to ensure proper separation of code and data.",
            code: Some(
                "// Example using parameterized query with Node.js and MySQL
const mysql = require('mysql2/promise');

async function getUserData(userId) {
  const connection = await mysql.createConnection({/*config*/});

  // Safe parameterized query
  const [rows] = await connection.execute(
    'SELECT * FROM users WHERE id = ?',
    [userId]
  );

  return rows;
}",
            ),
            resources: &[
                "OWASP SQL Injection Prevention Cheat Sheet",
                "Bobby Tables: A guide to preventing SQL injection",
            ],
        },
    ),
    (
        "Missing Content Security Policy",
        RecommendationTemplate {
            title: "Implement a Content Security Policy",
            description: "Add a Content Security Policy header to restrict which resources can be loaded and executed by the browser, reducing the risk of XSS and other code injection attacks.",
            code: Some(
                "// Example CSP header
Content-Security-Policy: default-src 'self';
  script-src 'self' https://trusted-cdn.com;
  style-src 'self' https://trusted-cdn.com;
  img-src 'self' data: https://trusted-cdn.com;
  connect-src 'self' https://api.example.com;
  frame-ancestors 'none';
  form-action 'self';",
            ),
            resources: &["MDN Content Security Policy Guide", "CSP Evaluator Tool"],
        },
    ),
    (
        "Insecure Cookie Configuration",
        RecommendationTemplate {
            title: "Set secure attributes on cookies",
            description: "Always set the Secure, HttpOnly, and SameSite attributes on sensitive cookies to prevent theft and unauthorized access.",
            code: Some(
                "// Example in Express.js
app.use(session({
  secret: 'your-secret-key',
  cookie: {
    secure: true,        // Only sent over HTTPS
    httpOnly: true,      // Not accessible via JavaScript
    sameSite: 'strict',  // Only sent in same-site requests
    maxAge: 3600000      // Session timeout
  }
}));",
            ),
            resources: &[
                "OWASP Session Management Cheat Sheet",
                "HTTP Cookies Security Best Practices",
            ],
        },
    ),
    (
        "Server Information Disclosure",
        RecommendationTemplate {
            title: "Minimize server information disclosure",
            description: "Configure your server to not reveal detailed version information in HTTP headers, error pages, or other responses.",
            code: Some(
                "# Example for Apache (in httpd.conf)
ServerTokens Prod
ServerSignature Off

# Example for Nginx (in nginx.conf)
server_tokens off;",
            ),
            resources: &[
                "OWASP Information Leakage Prevention",
                "Server Hardening Guidelines",
            ],
        },
    ),
];

/// Appended, in this order, when a report would otherwise carry fewer than three recommendations.
static FILLER_RECOMMENDATIONS: [RecommendationTemplate; 2] = [
    RecommendationTemplate {
        title: "Implement regular security testing",
        description: "Conduct regular security assessments, including penetration testing and code reviews, to identify and address vulnerabilities early.",
        code: None,
        resources: &["OWASP Testing Guide", "Web Application Security Testing Methodology"],
    },
    RecommendationTemplate {
        title: "Keep software components updated",
        description: "Regularly update all software components, libraries, and frameworks to ensure you have the latest security patches.",
        code: None,
        resources: &["OWASP Dependency Check", "Software Composition Analysis Best Practices"],
    },
];

/// Minimum number of recommendations in any report.
pub const MIN_RECOMMENDATIONS: usize = 3;

static RECOMMENDATION_INDEX: Lazy<HashMap<&'static str, &'static RecommendationTemplate>> =
    Lazy::new(|| RECOMMENDATIONS.iter().map(|(name, rec)| (*name, rec)).collect());

/// Retrieves the hand-authored remediation for a vulnerability name, if one exists.
pub fn get_recommendation(name: &str) -> Option<&'static RecommendationTemplate> {
    RECOMMENDATION_INDEX.get(name).copied()
}

/// Looks up a catalog entry by its exact name.
pub fn get_vulnerability(name: &str) -> Option<&'static VulnerabilityTemplate> {
    VULNERABILITIES.iter().find(|v| v.name == name)
}

fn generic_recommendation(vuln: &Vulnerability) -> Recommendation {
    Recommendation {
        title: format!("Fix {}", vuln.name),
        description: format!(
            "Address the {} severity {} vulnerability to improve security.",
            vuln.severity, vuln.name
        ),
        code: None,
        resources: Some(vec!["OWASP Top 10 Web Application Security Risks".to_string()]),
    }
}

/// Maps each vulnerability to a recommendation, preserving order.
///
/// When fewer than [`MIN_RECOMMENDATIONS`] come out, both fillers are appended.
/// Fillers are never deduplicated against what is already there.
pub fn recommend(vulnerabilities: &[Vulnerability]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = vulnerabilities
        .iter()
        .map(|vuln| match get_recommendation(&vuln.name) {
            Some(template) => Recommendation::from(template),
            None => generic_recommendation(vuln),
        })
        .collect();

    if recommendations.len() < MIN_RECOMMENDATIONS {
        recommendations.extend(FILLER_RECOMMENDATIONS.iter().map(Recommendation::from));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vuln(name: &str) -> Vulnerability {
        get_vulnerability(name).map(Vulnerability::from).unwrap()
    }

    #[test]
    fn catalogs_have_expected_shape() {
        assert_eq!(VULNERABILITIES.len(), 10);
        assert_eq!(TECHNOLOGIES.len(), 28);
        assert_eq!(PORTS[0].number, 80);
        assert_eq!(PORTS[1].number, 443);
        for (i, a) in VULNERABILITIES.iter().enumerate() {
            assert!(VULNERABILITIES[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn every_mapped_recommendation_names_a_catalog_entry() {
        for (name, _) in RECOMMENDATIONS {
            assert!(get_vulnerability(name).is_some(), "{name} not in catalog");
        }
    }

    #[test]
    fn mapped_vulnerability_uses_hand_authored_entry() {
        let recs = recommend(&[vuln("SQL Injection")]);
        assert_eq!(recs[0].title, "Use parameterized queries or prepared statements");
        assert!(recs[0].code.is_some());
    }

    #[test]
    fn unmapped_vulnerability_gets_generic_entry() {
        let recs = recommend(&[vuln("Open Redirect")]);
        assert_eq!(recs[0].title, "Fix Open Redirect");
        assert_eq!(
            recs[0].description,
            "Address the low severity Open Redirect vulnerability to improve security."
        );
        assert_eq!(
            recs[0].resources.as_deref(),
            Some(&["OWASP Top 10 Web Application Security Risks".to_string()][..])
        );
        assert!(recs[0].code.is_none());
    }

    #[test]
    fn fillers_are_appended_below_the_floor() {
        let recs = recommend(&[vuln("Open Redirect"), vuln("SQL Injection")]);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[2].title, "Implement regular security testing");
        assert_eq!(recs[3].title, "Keep software components updated");

        let empty = recommend(&[]);
        assert_eq!(empty.len(), 2);
    }

    #[test]
    fn no_fillers_at_or_above_the_floor() {
        let vulns = [vuln("Open Redirect"), vuln("SQL Injection"), vuln("Outdated TLS Version")];
        let recs = recommend(&vulns);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[1].title, "Use parameterized queries or prepared statements");
    }
}
