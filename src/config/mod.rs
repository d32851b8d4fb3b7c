//! Dashboard configuration fetched once per session from `GET /api/config`.
//!
//! The fetch itself lives outside this crate; callers hand the raw payload
//! (or a transport error) to the loader seam and get the parsed thresholds
//! back. A failed load falls back to the hardcoded defaults so every view
//! in the session agrees on the same cut points.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Risk score cut points separating the priority tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for RiskThresholds {
    /// Fallback cut points used when the config endpoint is unreachable.
    fn default() -> Self {
        Self {
            high: 150.0,
            medium: 75.0,
            low: 30.0,
        }
    }
}

/// Payload of `GET /api/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfig {
    pub thresholds: RiskThresholds,
    /// Builds older than this many days show up in the overdue report.
    #[serde(default = "default_deployment_age_days")]
    pub deployment_age_days: u32,
}

fn default_deployment_age_days() -> u32 {
    90
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
            deployment_age_days: default_deployment_age_days(),
        }
    }
}

impl ThresholdConfig {
    /// Parse the raw config payload. Callers fall back to `Default` on error.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Session-wide cache for the threshold configuration.
///
/// However many views ask for the config, the loader runs at most once per
/// session. A load failure is logged and the fallback is cached in its
/// place, keeping classification deterministic for the rest of the session.
/// `invalidate` drops the cached value for a manual refresh.
#[derive(Debug, Default)]
pub struct ConfigCache {
    inner: RwLock<Option<Arc<ThresholdConfig>>>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached config, running `load` if nothing is cached yet.
    pub fn get_or_load<F>(&self, load: F) -> Arc<ThresholdConfig>
    where
        F: FnOnce() -> Result<ThresholdConfig, ConfigError>,
    {
        if let Some(config) = self.cached() {
            return config;
        }

        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have filled the slot while we waited.
        if let Some(config) = slot.as_ref() {
            return Arc::clone(config);
        }

        let config = Arc::new(load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config load failed, using fallback thresholds");
            ThresholdConfig::default()
        }));
        *slot = Some(Arc::clone(&config));
        config
    }

    /// The cached config, if a load has happened this session.
    pub fn cached(&self) -> Option<Arc<ThresholdConfig>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// Drop the cached value so the next reader reloads.
    pub fn invalidate(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_payload() {
        let config = ThresholdConfig::from_json(
            r#"{"thresholds":{"high":120.0,"medium":60.0,"low":20.0},"deploymentAgeDays":30}"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.high, 120.0);
        assert_eq!(config.thresholds.medium, 60.0);
        assert_eq!(config.thresholds.low, 20.0);
        assert_eq!(config.deployment_age_days, 30);
    }

    #[test]
    fn deployment_age_defaults_when_absent() {
        let config =
            ThresholdConfig::from_json(r#"{"thresholds":{"high":120.0,"medium":60.0,"low":20.0}}"#)
                .unwrap();
        assert_eq!(config.deployment_age_days, 90);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(ThresholdConfig::from_json("{not json").is_err());
        assert!(ThresholdConfig::from_json(r#"{"thresholds":{}}"#).is_err());
    }

    #[test]
    fn fallback_values() {
        let config = ThresholdConfig::default();
        assert_eq!(config.thresholds.high, 150.0);
        assert_eq!(config.thresholds.medium, 75.0);
        assert_eq!(config.thresholds.low, 30.0);
        assert_eq!(config.deployment_age_days, 90);
    }

    #[test]
    fn cache_runs_loader_once() {
        let cache = ConfigCache::new();
        let mut calls = 0;

        let first = cache.get_or_load(|| {
            calls += 1;
            ThresholdConfig::from_json(r#"{"thresholds":{"high":100.0,"medium":50.0,"low":10.0}}"#)
        });
        let second = cache.get_or_load(|| {
            calls += 1;
            Ok(ThresholdConfig::default())
        });

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(first.thresholds.high, 100.0);
    }

    #[test]
    fn cache_falls_back_and_remembers_the_fallback() {
        let cache = ConfigCache::new();

        let config =
            cache.get_or_load(|| Err(ConfigError::Unavailable("timeout".to_string())));
        assert_eq!(*config, ThresholdConfig::default());

        // The fallback is cached; a later successful loader never runs.
        let again = cache.get_or_load(|| {
            panic!("loader should not run once the fallback is cached")
        });
        assert_eq!(*again, ThresholdConfig::default());
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let cache = ConfigCache::new();

        let first = cache.get_or_load(|| Ok(ThresholdConfig::default()));
        assert_eq!(first.thresholds.high, 150.0);

        cache.invalidate();
        assert!(cache.cached().is_none());

        let reloaded = cache.get_or_load(|| {
            ThresholdConfig::from_json(r#"{"thresholds":{"high":99.0,"medium":50.0,"low":10.0}}"#)
        });
        assert_eq!(reloaded.thresholds.high, 99.0);
    }
}
