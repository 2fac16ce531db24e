//! Watchcover-Coverage: resolves playback telemetry into watch coverage.
//!
//! Given samples in receipt order, the resolver works out which stretches of
//! a video were plausibly watched in real time (`valid`) and which were
//! skipped over faster than playback allows (`invalid`):
//!
//! 1. [`classify`] labels every consecutive pair of samples as ignored,
//!    valid or invalid using a speed bound from [`CoverageParams`].
//! 2. [`merge`] collapses each interval set into sorted, disjoint ranges.
//! 3. [`reconcile`] removes valid coverage from the invalid set.
//!
//! [`CoverageResolver`] runs all three passes over a full timeline.
//! [`IncrementalResolver`] produces the same result sample by sample.
//!
//! # Examples
//!
//! ```
//! use watchcover_common::{Interval, PlaybackSample};
//! use watchcover_coverage::resolve;
//!
//! let samples = [
//!     PlaybackSample::new(0.0, 0.0),
//!     PlaybackSample::new(5.0, 5.0),
//!     PlaybackSample::new(3.0, 6.0),
//!     PlaybackSample::new(8.0, 7.0),
//! ];
//!
//! let result = resolve(&samples);
//! assert_eq!(result.valid, vec![Interval::new(0.0, 5.0)]);
//! assert_eq!(result.invalid, vec![Interval::new(5.0, 8.0)]);
//! ```

pub mod classify;
pub mod incremental;
pub mod merge;
pub mod params;
pub mod reconcile;
pub mod resolver;

pub use classify::{classify, classify_pair, Classified, PairClass};
pub use incremental::IncrementalResolver;
pub use merge::{insert_merged, merge};
pub use params::CoverageParams;
pub use reconcile::subtract;
pub use resolver::{resolve, CoverageResolver, CoverageResult};
