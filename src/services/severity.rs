//! Display severity classification shared by the risk factor views.

use serde::{Deserialize, Serialize};

use crate::models::vulnerability::Impact;

/// Display severity of a single risk factor.
///
/// Deliberately coarser than the backend's impact scale: critical and high
/// impact render identically, and every mitigating factor renders as
/// informational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Sort rank, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::Info => 3,
        }
    }

    /// Surface color token for the factor card background.
    pub fn surface_color(&self) -> &'static str {
        match self {
            Self::High => "--a-surface-danger-subtle",
            Self::Medium => "--a-surface-warning-subtle",
            Self::Low => "--a-surface-success-subtle",
            Self::Info => "--a-surface-info-subtle",
        }
    }

    /// Icon color token matching the surface color.
    pub fn icon_color(&self) -> &'static str {
        match self {
            Self::High => "--a-icon-danger",
            Self::Medium => "--a-icon-warning",
            Self::Low => "--a-icon-success",
            Self::Info => "--a-icon-info",
        }
    }

    /// Tag variant for the factor chip.
    pub fn tag_variant(&self) -> &'static str {
        match self {
            Self::High => "error",
            Self::Medium => "warning",
            Self::Low => "success",
            Self::Info => "info",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a factor for display from its backend impact and multiplier.
///
/// A multiplier below 1.0 reduces the score, so the factor renders as
/// informational no matter how the backend classified its impact.
pub fn from_impact_and_multiplier(impact: Impact, multiplier: f64) -> Severity {
    if multiplier < 1.0 {
        return Severity::Info;
    }
    match impact {
        Impact::Critical | Impact::High => Severity::High,
        Impact::Medium => Severity::Medium,
        Impact::Low => Severity::Low,
        Impact::Unknown => {
            tracing::warn!("risk factor with unrecognized impact, rendering as info");
            Severity::Info
        }
    }
}
