//! Tunables for the real-time speed bound.

use serde::{Deserialize, Serialize};
use watchcover_common::{Error, Result};

/// Default playback speed multiplier tolerated before a jump counts as a seek.
pub const DEFAULT_SPEED_FACTOR: f64 = 2.0;

/// Default additive allowance, in seconds, for jitter and coarse polling.
pub const DEFAULT_SLACK_SECS: f64 = 2.0;

/// Parameters of the classification bound.
///
/// A forward advance of `d` seconds over `t` seconds of wall clock is real-time
/// playback when `d < speed_factor * t + slack_secs`. Downstream completion
/// semantics depend on the defaults, so change them only deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageParams {
    pub speed_factor: f64,
    pub slack_secs: f64,
}

impl Default for CoverageParams {
    fn default() -> Self {
        Self {
            speed_factor: DEFAULT_SPEED_FACTOR,
            slack_secs: DEFAULT_SLACK_SECS,
        }
    }
}

impl CoverageParams {
    /// Exclusive upper bound on the forward advance allowed over `delta_time`.
    pub fn max_advance(&self, delta_time: f64) -> f64 {
        self.speed_factor * delta_time + self.slack_secs
    }

    /// Reject parameters that would make the bound meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.speed_factor.is_finite() || self.speed_factor <= 0.0 {
            return Err(Error::config(format!(
                "coverage.speed_factor must be a positive number, got {}",
                self.speed_factor
            )));
        }
        if !self.slack_secs.is_finite() || self.slack_secs < 0.0 {
            return Err(Error::config(format!(
                "coverage.slack_secs must be a non-negative number, got {}",
                self.slack_secs
            )));
        }
        Ok(())
    }
}
