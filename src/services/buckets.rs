//! Priority bucket classification against configured thresholds.
//!
//! Buckets are half-open intervals `[min, max)` built from descending cut
//! points; the top tier is unbounded above. Cut points come from trusted
//! configuration and are not validated: a score below every tier simply
//! lands in no counted bucket.

use serde::Serialize;

use crate::config::RiskThresholds;
use crate::models::vulnerability::Vulnerability;
use crate::models::workload::Workload;

/// One named priority tier covering `[min_threshold, max_threshold)`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    pub min_threshold: f64,
    pub max_threshold: f64,
}

impl Bucket {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min_threshold && score < self.max_threshold
    }
}

/// Ordered, contiguous priority tiers for one dashboard view.
#[derive(Debug, Clone)]
pub struct BucketSet {
    buckets: Vec<Bucket>,
}

impl BucketSet {
    /// Build contiguous tiers from descending cut points.
    ///
    /// The first tier is unbounded above; each following tier ends where the
    /// previous one starts.
    pub fn from_cut_points(cut_points: &[(&str, f64)]) -> Self {
        let mut buckets = Vec::with_capacity(cut_points.len());
        let mut upper = f64::INFINITY;
        for (name, min) in cut_points {
            buckets.push(Bucket {
                name: (*name).to_string(),
                min_threshold: *min,
                max_threshold: upper,
            });
            upper = *min;
        }
        Self { buckets }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The bucket a score falls into, if any.
    pub fn classify(&self, score: f64) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.contains(score))
    }

    /// Per-bucket tallies for a dashboard summary row.
    pub fn counts<I>(&self, scores: I) -> Vec<BucketCount>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts: Vec<BucketCount> = self
            .buckets
            .iter()
            .map(|bucket| BucketCount {
                name: bucket.name.clone(),
                count: 0,
            })
            .collect();
        for score in scores {
            if let Some(idx) = self.buckets.iter().position(|bucket| bucket.contains(score)) {
                counts[idx].count += 1;
            }
        }
        counts
    }

    /// Members of exactly one bucket, for a focused remediation view.
    pub fn filter_vulnerabilities<'a>(
        &self,
        bucket_name: &str,
        vulns: &'a [Vulnerability],
    ) -> Vec<&'a Vulnerability> {
        match self.buckets.iter().find(|bucket| bucket.name == bucket_name) {
            Some(bucket) => vulns
                .iter()
                .filter(|vuln| bucket.contains(vuln.risk_score))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Count of scored vulnerabilities in one bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BucketCount {
    pub name: String,
    pub count: u64,
}

/// Vulnerability counts across the four fixed dashboard tiers.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub very_low: u64,
}

impl TierCounts {
    /// Classify every score against the configured cut points in one pass.
    pub fn tally<I>(scores: I, thresholds: &RiskThresholds) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts = Self::default();
        for score in scores {
            if score >= thresholds.high {
                counts.high += 1;
            } else if score >= thresholds.medium {
                counts.medium += 1;
            } else if score >= thresholds.low {
                counts.low += 1;
            } else {
                counts.very_low += 1;
            }
        }
        counts
    }

    /// Sum with another workload's counts.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            high: self.high + other.high,
            medium: self.medium + other.medium,
            low: self.low + other.low,
            very_low: self.very_low + other.very_low,
        }
    }

    pub fn total(&self) -> u64 {
        self.high + self.medium + self.low + self.very_low
    }
}

/// Aggregate tier counts for one team, for the leader view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRiskSummary {
    pub team: String,
    pub tiers: TierCounts,
}

/// Per-team tier counts over a list of workloads, teams in first-seen order.
pub fn summarize_teams<'a, W, I>(workloads: I, thresholds: &RiskThresholds) -> Vec<TeamRiskSummary>
where
    W: Workload + 'a,
    I: IntoIterator<Item = &'a W>,
{
    let mut summaries: Vec<TeamRiskSummary> = Vec::new();
    for workload in workloads {
        let tiers = TierCounts::tally(
            workload.vulnerabilities().iter().map(|vuln| vuln.risk_score),
            thresholds,
        );
        match summaries
            .iter_mut()
            .find(|summary| summary.team == workload.team())
        {
            Some(summary) => summary.tiers = summary.tiers.merge(&tiers),
            None => summaries.push(TeamRiskSummary {
                team: workload.team().to_string(),
                tiers,
            }),
        }
    }
    summaries
}
