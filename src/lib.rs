//! Watchcover - playback telemetry coverage tracking
//!
//! This library crate exposes configuration, the telemetry ingestion boundary
//! and the completion policy for integration testing. Coverage resolution
//! itself lives in `watchcover-coverage`.

pub mod config;
pub mod policy;
pub mod timeline;

pub use watchcover_common::{Interval, PlaybackSample};
pub use watchcover_coverage::{CoverageParams, CoverageResolver, CoverageResult};
