//! Full-timeline coverage resolution.
//!
//! Every call recomputes from the complete sample history it is given. This
//! is the reference semantic; [`crate::IncrementalResolver`] must agree with
//! it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use watchcover_common::{total_length, Interval, PlaybackSample};

use crate::classify::classify;
use crate::merge::merge;
use crate::params::CoverageParams;
use crate::reconcile::subtract;

/// Valid and invalid coverage for one timeline.
///
/// Both sets are sorted and internally disjoint, and no invalid interval
/// overlaps a valid one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub valid: Vec<Interval>,
    pub invalid: Vec<Interval>,
}

impl CoverageResult {
    /// Seconds of video plausibly watched in real time.
    pub fn valid_secs(&self) -> f64 {
        total_length(&self.valid)
    }

    /// Seconds of video skipped over by seeking.
    pub fn invalid_secs(&self) -> f64 {
        total_length(&self.invalid)
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Resolves complete timelines with a fixed set of parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageResolver {
    params: CoverageParams,
}

impl CoverageResolver {
    pub fn new(params: CoverageParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CoverageParams {
        &self.params
    }

    /// Classify, merge and reconcile `samples`, which must be in receipt order.
    pub fn resolve(&self, samples: &[PlaybackSample]) -> CoverageResult {
        let classified = classify(samples, &self.params);
        let valid = merge(classified.valid);
        let merged_invalid = merge(classified.invalid);
        let invalid = subtract(&merged_invalid, &valid);

        debug!(
            samples = samples.len(),
            valid_ranges = valid.len(),
            invalid_ranges = invalid.len(),
            "resolved coverage"
        );

        CoverageResult { valid, invalid }
    }
}

/// Resolve `samples` with the default parameters.
pub fn resolve(samples: &[PlaybackSample]) -> CoverageResult {
    CoverageResolver::default().resolve(samples)
}
