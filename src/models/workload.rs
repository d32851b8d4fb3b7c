//! Team workloads: deployed applications and GitHub repositories.
//!
//! Applications come from `/api/applications`, repositories from
//! `/api/github`. Both carry the same scored vulnerability records, so the
//! aggregation views run over either through the `Workload` trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vulnerability::Vulnerability;

/// A deployed application owned by a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub team: String,
    /// Deployment environment, e.g. `"production"`.
    #[serde(default)]
    pub environment: Option<String>,
    /// When the running build was last deployed. Absent until the first
    /// deploy lands.
    #[serde(default)]
    pub last_deployed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// A GitHub repository with dependency scanning enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// Anything that carries a team's scored vulnerabilities.
pub trait Workload {
    fn team(&self) -> &str;
    fn vulnerabilities(&self) -> &[Vulnerability];
}

impl Workload for Application {
    fn team(&self) -> &str {
        &self.team
    }

    fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }
}

impl Workload for Repository {
    fn team(&self) -> &str {
        &self.team
    }

    fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_deserializes_camel_case() {
        let app: Application = serde_json::from_str(
            r#"{
                "name": "betaling-api",
                "team": "team-betaling",
                "environment": "production",
                "lastDeployedAt": "2026-05-01T12:00:00Z",
                "vulnerabilities": []
            }"#,
        )
        .unwrap();
        assert_eq!(app.name, "betaling-api");
        assert_eq!(app.environment.as_deref(), Some("production"));
        assert!(app.last_deployed_at.is_some());
        assert!(app.vulnerabilities.is_empty());
    }

    #[test]
    fn repository_defaults_to_no_vulnerabilities() {
        let repo: Repository =
            serde_json::from_str(r#"{"name":"frontend","team":"team-web"}"#).unwrap();
        assert!(repo.vulnerabilities.is_empty());
        assert_eq!(Workload::team(&repo), "team-web");
    }
}
