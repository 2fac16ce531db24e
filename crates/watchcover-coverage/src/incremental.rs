//! Sample-at-a-time coverage resolution.
//!
//! Keeps the last sample and the merged valid/invalid sets instead of the
//! whole history. Merged sets are canonical, so inserting each new interval
//! with [`insert_merged`] yields exactly the sets a full [`crate::merge`]
//! would; reconciliation is then rerun over those sets on demand.

use watchcover_common::{Interval, PlaybackSample};

use crate::classify::{classify_pair, PairClass};
use crate::merge::insert_merged;
use crate::params::CoverageParams;
use crate::reconcile::subtract;
use crate::resolver::CoverageResult;

/// Incremental counterpart of [`crate::CoverageResolver`].
#[derive(Debug, Clone, Default)]
pub struct IncrementalResolver {
    params: CoverageParams,
    last: Option<PlaybackSample>,
    valid: Vec<Interval>,
    invalid: Vec<Interval>,
}

impl IncrementalResolver {
    pub fn new(params: CoverageParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Feed the next sample in receipt order.
    ///
    /// Returns the classification of the pair it closes, or `None` for the
    /// first sample.
    pub fn push(&mut self, sample: PlaybackSample) -> Option<PairClass> {
        let class = self
            .last
            .map(|prev| classify_pair(&prev, &sample, &self.params));
        self.last = Some(sample);

        match class {
            Some(PairClass::Valid(span)) => insert_merged(&mut self.valid, span),
            Some(PairClass::Invalid(span)) => insert_merged(&mut self.invalid, span),
            Some(PairClass::Ignored) | None => {}
        }
        class
    }

    /// Current coverage, identical to resolving every pushed sample at once.
    pub fn result(&self) -> CoverageResult {
        CoverageResult {
            valid: self.valid.clone(),
            invalid: subtract(&self.invalid, &self.valid),
        }
    }

    pub fn last_sample(&self) -> Option<&PlaybackSample> {
        self.last.as_ref()
    }
}

impl Extend<PlaybackSample> for IncrementalResolver {
    fn extend<I: IntoIterator<Item = PlaybackSample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_first_sample_has_no_pair() {
        let mut inc = IncrementalResolver::default();
        assert_eq!(inc.push(PlaybackSample::new(3.0, 0.0)), None);
        assert!(inc.result().is_empty());
        assert_eq!(inc.last_sample(), Some(&PlaybackSample::new(3.0, 0.0)));
    }

    #[test]
    fn test_push_reports_classification() {
        let mut inc = IncrementalResolver::default();
        inc.push(PlaybackSample::new(0.0, 0.0));
        assert_eq!(
            inc.push(PlaybackSample::new(5.0, 5.0)),
            Some(PairClass::Valid(Interval::new(0.0, 5.0)))
        );
        assert_eq!(
            inc.push(PlaybackSample::new(3.0, 6.0)),
            Some(PairClass::Ignored)
        );
        assert_eq!(
            inc.push(PlaybackSample::new(8.0, 7.0)),
            Some(PairClass::Invalid(Interval::new(3.0, 8.0)))
        );
        assert_eq!(inc.result().invalid, vec![Interval::new(5.0, 8.0)]);
    }

    #[test]
    fn test_matches_full_recomputation_at_every_step() {
        let timeline = [
            PlaybackSample::new(0.0, 0.0),
            PlaybackSample::new(4.0, 4.0),
            PlaybackSample::new(50.0, 5.0),
            PlaybackSample::new(20.0, 6.0),
            PlaybackSample::new(28.0, 14.0),
            PlaybackSample::new(28.0, 20.0),
            PlaybackSample::new(36.0, 28.0),
            PlaybackSample::new(2.0, 29.0),
            PlaybackSample::new(3.0, 30.0),
        ];

        let mut inc = IncrementalResolver::default();
        for (i, sample) in timeline.iter().enumerate() {
            inc.push(*sample);
            assert_eq!(inc.result(), resolve(&timeline[..=i]), "diverged at sample {i}");
        }
    }

    #[test]
    fn test_non_finite_positions_match_full_recomputation() {
        let timeline = [
            PlaybackSample::new(0.0, 0.0),
            PlaybackSample::new(100.0, 1.0),
            PlaybackSample::new(200.0, 100.0),
            PlaybackSample::new(300.0, 101.0),
            PlaybackSample::new(f64::NAN, 102.0),
            PlaybackSample::new(50.0, 103.0),
            PlaybackSample::new(f64::INFINITY, 104.0),
            PlaybackSample::new(f64::INFINITY, 105.0),
            PlaybackSample::new(60.0, 106.0),
        ];

        let mut inc = IncrementalResolver::default();
        for (i, sample) in timeline.iter().enumerate() {
            inc.push(*sample);
            assert_eq!(inc.result(), resolve(&timeline[..=i]), "diverged at sample {i}");
        }

        let result = inc.result();
        assert_eq!(result.valid, vec![Interval::new(100.0, 200.0)]);
        // [0,100), [200,300) and [50,inf) merge into [0,inf) before reconciling
        assert_eq!(
            result.invalid,
            vec![Interval::new(0.0, 100.0), Interval::new(200.0, f64::INFINITY)]
        );
    }

    #[test]
    fn test_extend() {
        let timeline = vec![
            PlaybackSample::new(0.0, 0.0),
            PlaybackSample::new(100.0, 1.0),
        ];
        let mut inc = IncrementalResolver::new(CoverageParams::default());
        inc.extend(timeline.clone());
        assert_eq!(inc.result(), resolve(&timeline));
    }
}
