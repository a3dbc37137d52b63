// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- Severity & Risk ---

/// The severity attached to a single vulnerability.
///
/// Serialized lowercase (`"high"`) to stay shape-compatible with stored reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// The qualitative risk level of a whole report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

// --- Static Catalog Entries ---

/// A build-time vulnerability catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct VulnerabilityTemplate {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    /// A request path or the name of the header block the issue lives in.
    pub location: &'static str,
    pub evidence: Option<&'static str>,
    pub cvss: Option<&'static str>,
}

/// A build-time port catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct PortTemplate {
    pub number: u16,
    pub service: &'static str,
}

/// A hand-authored remediation entry from the knowledge base.
#[derive(Debug)]
pub struct RecommendationTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub code: Option<&'static str>,
    pub resources: &'static [&'static str],
}

// --- Report Records ---

/// A vulnerability as it appears inside a `ScanReport`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vulnerability {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss: Option<String>,
}

impl From<&VulnerabilityTemplate> for Vulnerability {
    fn from(template: &VulnerabilityTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            severity: template.severity,
            description: template.description.to_string(),
            location: template.location.to_string(),
            evidence: template.evidence.map(String::from),
            cvss: template.cvss.map(String::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    pub number: u16,
    pub service: String,
}

impl From<&PortTemplate> for Port {
    fn from(template: &PortTemplate) -> Self {
        Self { number: template.number, service: template.service.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl From<&RecommendationTemplate> for Recommendation {
    fn from(template: &RecommendationTemplate) -> Self {
        Self {
            title: template.title.to_string(),
            description: template.description.to_string(),
            code: template.code.map(String::from),
            resources: Some(template.resources.iter().map(|r| r.to_string()).collect()),
        }
    }
}

/// Per-severity counts. The three fields always add up to the number of vulnerabilities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VulnerabilitiesSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl VulnerabilitiesSummary {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// The synthetic technical profile of the target.
///
/// `headers` and `dns` are pre-rendered multi-line text blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechnicalDetails {
    pub headers: String,
    pub technologies: Vec<String>,
    pub ports: Vec<Port>,
    pub dns: String,
}

// --- Main Report ---

/// The immutable result of one simulated scan.
///
/// Every field except `scan_date` and `scan_duration` is a pure function of the
/// target hostname.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub url: String,
    pub scan_date: String,
    /// `"<N> seconds"`, drawn at random. Presentation only, not reproducible.
    pub scan_duration: String,
    pub security_score: u8,
    pub risk_level: RiskLevel,
    pub vulnerabilities_summary: VulnerabilitiesSummary,
    pub vulnerabilities: Vec<Vulnerability>,
    pub recommendations: Vec<Recommendation>,
    pub technical_details: TechnicalDetails,
}

impl ScanReport {
    /// Compares every reproducible field, ignoring the wall-clock ones.
    pub fn deterministic_eq(&self, other: &ScanReport) -> bool {
        self.vulnerabilities == other.vulnerabilities
            && self.vulnerabilities_summary == other.vulnerabilities_summary
            && self.security_score == other.security_score
            && self.risk_level == other.risk_level
            && self.recommendations == other.recommendations
            && self.technical_details == other.technical_details
    }

    /// Returns the recommendation produced for the vulnerability at `index`.
    ///
    /// Recommendations are emitted in vulnerability order, so the index lines up
    /// until the generic fillers start.
    pub fn recommendation_for(&self, index: usize) -> Option<&Recommendation> {
        if index < self.vulnerabilities.len() {
            self.recommendations.get(index)
        } else {
            None
        }
    }
}
