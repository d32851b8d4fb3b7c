//! Build age reporting for the overdue deployments view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::workload::Application;

/// An application whose running build exceeds the configured age window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverdueBuild {
    pub application: String,
    pub team: String,
    pub last_deployed_at: DateTime<Utc>,
    pub age_days: i64,
}

/// Applications overdue for a rebuild, oldest first.
///
/// Applications without a recorded deployment are skipped; there is nothing
/// to age until the first deploy lands. `now` is a parameter so callers and
/// tests control the clock.
pub fn overdue_builds(
    applications: &[Application],
    now: DateTime<Utc>,
    max_age_days: u32,
) -> Vec<OverdueBuild> {
    let mut overdue: Vec<OverdueBuild> = applications
        .iter()
        .filter_map(|app| {
            let last_deployed_at = app.last_deployed_at?;
            let age_days = (now - last_deployed_at).num_days();
            (age_days > i64::from(max_age_days)).then(|| OverdueBuild {
                application: app.name.clone(),
                team: app.team.clone(),
                last_deployed_at,
                age_days,
            })
        })
        .collect();
    overdue.sort_by_key(|build| build.last_deployed_at);
    overdue
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn app(name: &str, team: &str, last_deployed_at: Option<DateTime<Utc>>) -> Application {
        Application {
            name: name.to_string(),
            team: team.to_string(),
            environment: Some("production".to_string()),
            last_deployed_at,
            vulnerabilities: vec![],
        }
    }

    fn now() -> DateTime<Utc> {
        "2026-08-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn reports_builds_older_than_the_window() {
        let apps = vec![
            app("fresh", "team-a", Some(now() - Duration::days(30))),
            app("stale", "team-a", Some(now() - Duration::days(91))),
            app("ancient", "team-b", Some(now() - Duration::days(400))),
        ];

        let overdue = overdue_builds(&apps, now(), 90);
        let names: Vec<&str> = overdue.iter().map(|b| b.application.as_str()).collect();
        assert_eq!(names, vec!["ancient", "stale"]);
        assert_eq!(overdue[0].age_days, 400);
        assert_eq!(overdue[1].age_days, 91);
        assert_eq!(overdue[1].team, "team-a");
    }

    #[test]
    fn build_at_exactly_the_window_is_not_overdue() {
        let apps = vec![app("edge", "team-a", Some(now() - Duration::days(90)))];
        assert!(overdue_builds(&apps, now(), 90).is_empty());
    }

    #[test]
    fn never_deployed_applications_are_skipped() {
        let apps = vec![app("undeployed", "team-a", None)];
        assert!(overdue_builds(&apps, now(), 90).is_empty());
    }
}
