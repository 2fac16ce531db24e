//! First pass: label each consecutive pair of samples.

use tracing::trace;
use watchcover_common::{Interval, PlaybackSample};

use crate::params::CoverageParams;

/// Outcome of classifying one `(prev, curr)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairClass {
    /// No forward progress: rewind, pause or a flat report.
    Ignored,
    /// Forward progress within the real-time bound.
    Valid(Interval),
    /// Forward progress too fast to be playback, i.e. a seek.
    Invalid(Interval),
}

/// Classify a single pair. Rules apply in priority order:
/// no forward progress, then within bound, then everything else.
///
/// A NaN position delta is not forward progress.
pub fn classify_pair(
    prev: &PlaybackSample,
    curr: &PlaybackSample,
    params: &CoverageParams,
) -> PairClass {
    let delta_position = curr.position - prev.position;
    let delta_time = curr.received_at - prev.received_at;

    if delta_position.is_nan() || delta_position <= 0.0 {
        return PairClass::Ignored;
    }

    let span = Interval::new(prev.position, curr.position);
    if delta_position < params.max_advance(delta_time) {
        PairClass::Valid(span)
    } else {
        PairClass::Invalid(span)
    }
}

/// Unmerged intervals produced by the classification pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub valid: Vec<Interval>,
    pub invalid: Vec<Interval>,
}

/// Classify every consecutive pair of `samples`, in order.
pub fn classify(samples: &[PlaybackSample], params: &CoverageParams) -> Classified {
    let mut out = Classified::default();

    for pair in samples.windows(2) {
        let class = classify_pair(&pair[0], &pair[1], params);
        trace!(
            from = pair[0].position,
            to = pair[1].position,
            ?class,
            "classified sample pair"
        );
        match class {
            PairClass::Ignored => {}
            PairClass::Valid(span) => out.valid.push(span),
            PairClass::Invalid(span) => out.invalid.push(span),
        }
    }

    out
}
