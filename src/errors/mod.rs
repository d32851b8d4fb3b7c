//! Error types for the configuration seam.
//!
//! The display transformations themselves are total: degraded input falls
//! back to safe defaults with a diagnostic warning instead of erroring.

/// Failure to obtain a usable threshold configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Transport-level failure reported by the fetch adapter.
    #[error("config endpoint unavailable: {0}")]
    Unavailable(String),
}
