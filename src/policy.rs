//! Completion decision layered on top of resolved coverage.
//!
//! A viewing completes once valid coverage reaches the video's duration minus
//! a configured slack. Invalid coverage never counts.

use serde::Serialize;
use watchcover_coverage::CoverageResult;

use crate::config::CompletionConfig;

/// Threshold and reward applied to a resolved timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionPolicy {
    pub slack_secs: f64,
    pub reward: u32,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self::from(&CompletionConfig::default())
    }
}

impl From<&CompletionConfig> for CompletionPolicy {
    fn from(config: &CompletionConfig) -> Self {
        Self {
            slack_secs: config.slack_secs,
            reward: config.reward,
        }
    }
}

/// Outcome of [`CompletionPolicy::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStatus {
    pub watched_secs: f64,
    pub required_secs: f64,
    pub complete: bool,
    /// Present only when `complete` is true.
    pub reward: Option<u32>,
}

impl CompletionPolicy {
    /// Seconds of valid coverage needed for a video of `duration_secs`.
    pub fn required_secs(&self, duration_secs: f64) -> f64 {
        (duration_secs - self.slack_secs).max(0.0)
    }

    pub fn evaluate(&self, coverage: &CoverageResult, duration_secs: f64) -> CompletionStatus {
        let watched_secs = coverage.valid_secs();
        let required_secs = self.required_secs(duration_secs);
        let complete = watched_secs >= required_secs;

        if complete {
            tracing::info!(
                "Viewing complete: {:.1}s watched of {:.1}s required",
                watched_secs,
                required_secs
            );
        } else {
            tracing::debug!(
                "Viewing incomplete: {:.1}s watched of {:.1}s required",
                watched_secs,
                required_secs
            );
        }

        CompletionStatus {
            watched_secs,
            required_secs,
            complete,
            reward: complete.then_some(self.reward),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchcover_common::Interval;

    fn coverage(valid: &[(f64, f64)], invalid: &[(f64, f64)]) -> CoverageResult {
        let to_set = |raw: &[(f64, f64)]| -> Vec<Interval> {
            raw.iter().map(|&(s, e)| Interval::new(s, e)).collect()
        };
        CoverageResult {
            valid: to_set(valid),
            invalid: to_set(invalid),
        }
    }

    #[test]
    fn test_required_secs() {
        let policy = CompletionPolicy::default();
        assert_eq!(policy.required_secs(120.0), 115.0);
        assert_eq!(policy.required_secs(3.0), 0.0);
    }

    #[test]
    fn test_complete_within_slack() {
        let policy = CompletionPolicy {
            slack_secs: 5.0,
            reward: 50,
        };
        let status = policy.evaluate(&coverage(&[(0.0, 40.0), (41.0, 97.0)], &[]), 100.0);
        assert_eq!(status.watched_secs, 96.0);
        assert!(status.complete);
        assert_eq!(status.reward, Some(50));
    }

    #[test]
    fn test_invalid_coverage_does_not_count() {
        let policy = CompletionPolicy::default();
        let status = policy.evaluate(&coverage(&[(0.0, 10.0)], &[(10.0, 100.0)]), 100.0);
        assert_eq!(status.watched_secs, 10.0);
        assert_eq!(status.required_secs, 95.0);
        assert!(!status.complete);
        assert_eq!(status.reward, None);
    }

    #[test]
    fn test_from_config() {
        let config = CompletionConfig {
            slack_secs: 0.0,
            reward: 7,
        };
        let policy = CompletionPolicy::from(&config);
        assert_eq!(policy.required_secs(60.0), 60.0);
        assert_eq!(policy.reward, 7);
    }
}
