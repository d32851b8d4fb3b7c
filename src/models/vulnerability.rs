//! Scored vulnerability records as delivered by the scanning backend.
//!
//! These are trusted, immutable inputs: the backend computes the score and
//! its breakdown, this crate only reshapes them for display. Field names on
//! the wire are camelCase.

use serde::{Deserialize, Serialize};

/// Backend qualitative severity class for a single risk factor.
///
/// The set of impact strings is open on the backend side; anything this
/// client does not recognize deserializes as `Unknown` rather than failing
/// the whole payload.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One named factor in a risk score breakdown.
///
/// `multiplier` is always strictly positive: `1.0` is neutral, below `1.0`
/// reduces the score, above `1.0` increases it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreFactor {
    /// Stable identifier, e.g. `"exposure"` or `"kev"`. Open set.
    pub name: String,
    /// Signed additive contribution to the final score.
    pub contribution: f64,
    /// This factor's share of the total score (0-100), display only.
    pub percentage: f64,
    pub multiplier: f64,
    /// Backend-supplied rationale, passed through verbatim.
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub impact: Impact,
}

/// How the backend arrived at a vulnerability's final score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreBreakdown {
    pub base_score: f64,
    #[serde(default)]
    pub factors: Vec<RiskScoreFactor>,
    pub total_score: f64,
}

/// A scored vulnerability in a package used by an application or repository.
///
/// The breakdown is optional: a vulnerability the backend has not finished
/// scoring legitimately ships without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    /// CVE-like identifier, unique within a workload.
    pub id: String,
    pub package: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub risk_score: f64,
    #[serde(default)]
    pub risk_score_breakdown: Option<RiskScoreBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_deserializes_screaming_snake_case() {
        let impact: Impact = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(impact, Impact::Critical);
        let impact: Impact = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(impact, Impact::Low);
    }

    #[test]
    fn unrecognized_impact_becomes_unknown() {
        let impact: Impact = serde_json::from_str("\"CATASTROPHIC\"").unwrap();
        assert_eq!(impact, Impact::Unknown);
    }

    #[test]
    fn factor_defaults_for_absent_fields() {
        let factor: RiskScoreFactor = serde_json::from_str(
            r#"{"name":"exposure","contribution":12.5,"percentage":20.0,"multiplier":1.4}"#,
        )
        .unwrap();
        assert_eq!(factor.impact, Impact::Unknown);
        assert_eq!(factor.explanation, "");
    }

    #[test]
    fn vulnerability_without_breakdown() {
        let vuln: Vulnerability = serde_json::from_str(
            r#"{"id":"CVE-2024-1234","package":"log4j-core","riskScore":187.5}"#,
        )
        .unwrap();
        assert!(vuln.risk_score_breakdown.is_none());
        assert!(vuln.summary.is_none());
        assert_eq!(vuln.risk_score, 187.5);
    }

    #[test]
    fn breakdown_round_trip() {
        let breakdown = RiskScoreBreakdown {
            base_score: 7.5,
            factors: vec![RiskScoreFactor {
                name: "kev".to_string(),
                contribution: 50.0,
                percentage: 40.0,
                multiplier: 2.0,
                explanation: "Listed in the CISA KEV catalog".to_string(),
                impact: Impact::Critical,
            }],
            total_score: 125.0,
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["baseScore"], 7.5);
        assert_eq!(json["factors"][0]["impact"], "CRITICAL");

        let back: RiskScoreBreakdown = serde_json::from_value(json).unwrap();
        assert_eq!(back, breakdown);
    }
}
