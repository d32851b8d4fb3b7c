//! Risk factor extraction: the explainable breakdown behind a score.
//!
//! Total over its input: missing breakdowns yield an empty list, unknown
//! factor names get a fallback icon and label. Worst case a factor renders
//! generically, never as an error.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::vulnerability::{Impact, Vulnerability};
use crate::services::labels::{FactorKind, LabelCatalog};
use crate::services::severity::{self, Severity};

/// Icon vocabulary for factor cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Bug,
    Globe,
    XmarkOctagon,
    ExclamationTriangle,
    Cloud,
    Clock,
    CheckmarkCircle,
}

impl IconName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Globe => "globe",
            Self::XmarkOctagon => "xmark-octagon",
            Self::ExclamationTriangle => "exclamation-triangle",
            Self::Cloud => "cloud",
            Self::Clock => "clock",
            Self::CheckmarkCircle => "checkmark-circle",
        }
    }
}

/// Display-ready risk factor derived from one breakdown entry.
///
/// Recomputed on every render; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    /// Resolved display label.
    pub name: String,
    /// Backend rationale, verbatim.
    pub description: String,
    pub contribution: f64,
    pub percentage: f64,
    pub multiplier: f64,
    pub impact: Impact,
    pub is_significant: bool,
    pub is_negative: bool,
    pub icon_name: IconName,
    pub severity: Severity,
}

/// Derive the display-ready factor list for a vulnerability.
///
/// Vulnerabilities without a computed breakdown yield an empty list: "no
/// explanation available" is a legitimate state, not an error. The
/// `"severity"` entry carries the base score rather than a real factor and
/// is always left out.
pub fn risk_factors(vuln: &Vulnerability, labels: &LabelCatalog) -> Vec<RiskFactor> {
    let Some(breakdown) = &vuln.risk_score_breakdown else {
        return Vec::new();
    };

    breakdown
        .factors
        .iter()
        .filter(|factor| FactorKind::from_name(&factor.name) != Some(FactorKind::Severity))
        .map(|factor| {
            // A multiplier of exactly 1.0 does not reduce risk, so it counts
            // as non-mitigating.
            let is_negative = factor.multiplier >= 1.0;
            let is_significant = if is_negative {
                matches!(factor.impact, Impact::High | Impact::Critical)
            } else {
                true
            };
            RiskFactor {
                name: labels.resolve(&factor.name),
                description: factor.explanation.clone(),
                contribution: factor.contribution,
                percentage: factor.percentage,
                multiplier: factor.multiplier,
                impact: factor.impact,
                is_significant,
                is_negative,
                icon_name: icon_for(&factor.name),
                severity: severity::from_impact_and_multiplier(factor.impact, factor.multiplier),
            }
        })
        .collect()
}

/// Map a factor name to its card icon.
fn icon_for(name: &str) -> IconName {
    match FactorKind::from_name(name) {
        Some(FactorKind::Severity) => IconName::Bug,
        Some(FactorKind::Exposure) => IconName::Globe,
        Some(FactorKind::Kev) => IconName::XmarkOctagon,
        Some(FactorKind::Epss) => IconName::ExclamationTriangle,
        Some(FactorKind::Environment) => IconName::Cloud,
        Some(FactorKind::PatchAvailable) => IconName::CheckmarkCircle,
        Some(FactorKind::BuildAge) => IconName::Clock,
        Some(FactorKind::ExploitReference) => IconName::XmarkOctagon,
        None => {
            tracing::warn!(factor = name, "unknown risk factor name, using fallback icon");
            IconName::CheckmarkCircle
        }
    }
}

/// Order factors most severe first, larger contributions breaking ties.
pub fn sort_by_severity(factors: &mut [RiskFactor]) {
    factors.sort_by(|a, b| {
        a.severity.rank().cmp(&b.severity.rank()).then_with(|| {
            b.contribution
                .abs()
                .partial_cmp(&a.contribution.abs())
                .unwrap_or(Ordering::Equal)
        })
    });
}

/// The top `n` critical/high-impact factors for the tag strip, critical
/// before high, then contribution descending.
pub fn top_risk_tags(factors: &[RiskFactor], n: usize) -> Vec<&RiskFactor> {
    let mut tags: Vec<&RiskFactor> = factors
        .iter()
        .filter(|factor| matches!(factor.impact, Impact::Critical | Impact::High))
        .collect();
    tags.sort_by(|a, b| {
        impact_rank(a.impact).cmp(&impact_rank(b.impact)).then_with(|| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(Ordering::Equal)
        })
    });
    tags.truncate(n);
    tags
}

fn impact_rank(impact: Impact) -> u8 {
    match impact {
        Impact::Critical => 0,
        Impact::High => 1,
        Impact::Medium => 2,
        Impact::Low => 3,
        Impact::Unknown => 4,
    }
}
