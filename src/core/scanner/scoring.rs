// src/core/scanner/scoring.rs

use crate::core::models::{RiskLevel, Severity, VulnerabilitiesSummary, Vulnerability};

const HIGH_PENALTY: usize = 15;
const MEDIUM_PENALTY: usize = 7;
const LOW_PENALTY: usize = 2;

/// Score, risk level and severity counts derived from a set of vulnerabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u8,
    pub risk: RiskLevel,
    pub summary: VulnerabilitiesSummary,
}

pub fn summarize(vulnerabilities: &[Vulnerability]) -> VulnerabilitiesSummary {
    vulnerabilities.iter().fold(VulnerabilitiesSummary::default(), |mut summary, v| {
        match v.severity {
            Severity::High => summary.high += 1,
            Severity::Medium => summary.medium += 1,
            Severity::Low => summary.low += 1,
        }
        summary
    })
}

/// `100 - (15h + 7m + 2l)`, floored at zero.
pub fn security_score(summary: &VulnerabilitiesSummary) -> u8 {
    let penalty = summary.high * HIGH_PENALTY + summary.medium * MEDIUM_PENALTY + summary.low * LOW_PENALTY;
    100usize.saturating_sub(penalty) as u8
}

pub fn risk_level(summary: &VulnerabilitiesSummary) -> RiskLevel {
    if summary.high > 0 {
        RiskLevel::High
    } else if summary.medium > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn score(vulnerabilities: &[Vulnerability]) -> ScoreCard {
    let summary = summarize(vulnerabilities);
    ScoreCard {
        score: security_score(&summary),
        risk: risk_level(&summary),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(high: usize, medium: usize, low: usize) -> VulnerabilitiesSummary {
        VulnerabilitiesSummary { high, medium, low }
    }

    #[test]
    fn no_vulnerabilities_is_a_perfect_low_risk_score() {
        let card = score(&[]);
        assert_eq!(card.score, 100);
        assert_eq!(card.risk, RiskLevel::Low);
        assert_eq!(card.summary.total(), 0);
    }

    #[test]
    fn penalties_are_weighted_by_severity() {
        assert_eq!(security_score(&summary(1, 0, 0)), 85);
        assert_eq!(security_score(&summary(0, 1, 0)), 93);
        assert_eq!(security_score(&summary(0, 0, 1)), 98);
        assert_eq!(security_score(&summary(2, 4, 1)), 40);
    }

    #[test]
    fn score_never_goes_negative() {
        assert_eq!(security_score(&summary(7, 0, 0)), 0);
        assert_eq!(security_score(&summary(10, 10, 10)), 0);
    }

    #[test]
    fn risk_follows_worst_severity() {
        assert_eq!(risk_level(&summary(1, 3, 3)), RiskLevel::High);
        assert_eq!(risk_level(&summary(0, 1, 3)), RiskLevel::Medium);
        assert_eq!(risk_level(&summary(0, 0, 3)), RiskLevel::Low);
    }
}
