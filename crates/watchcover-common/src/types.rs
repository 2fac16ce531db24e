//! Core playback types: telemetry samples and position intervals.
//!
//! Positions and receipt times are plain seconds as `f64`. Intervals are
//! half-open everywhere: `[start, end)` contains `start` but not `end`, so two
//! intervals that share an endpoint touch without overlapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One telemetry observation from a playback client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSample {
    /// Seconds into the video the client claims to be displaying.
    pub position: f64,
    /// Seconds on the collecting side's clock when the sample arrived.
    pub received_at: f64,
}

impl PlaybackSample {
    pub fn new(position: f64, received_at: f64) -> Self {
        Self {
            position,
            received_at,
        }
    }
}

/// A half-open range `[start, end)` over video position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Create a new interval. Callers guarantee `start <= end`.
    pub fn new(start: f64, end: f64) -> Self {
        debug_assert!(
            start <= end || start.is_nan() || end.is_nan(),
            "interval start {start} exceeds end {end}"
        );
        Self { start, end }
    }

    /// Length of the interval in seconds.
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the interval covers no positions at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the two intervals share at least one position.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Sum of the lengths of the given intervals.
///
/// Only meaningful for a disjoint set; overlapping input is double counted.
pub fn total_length(intervals: &[Interval]) -> f64 {
    intervals.iter().map(Interval::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_len() {
        assert_eq!(Interval::new(3.0, 8.0).len(), 5.0);
        assert_eq!(Interval::new(2.0, 2.0).len(), 0.0);
    }

    #[test]
    fn test_interval_is_empty() {
        assert!(Interval::new(4.0, 4.0).is_empty());
        assert!(!Interval::new(4.0, 4.5).is_empty());
    }

    #[test]
    fn test_interval_overlaps_is_half_open() {
        let a = Interval::new(0.0, 5.0);
        assert!(a.overlaps(&Interval::new(4.0, 6.0)));
        assert!(a.overlaps(&Interval::new(1.0, 2.0)));
        assert!(!a.overlaps(&Interval::new(5.0, 9.0)));
        assert!(!Interval::new(5.0, 9.0).overlaps(&a));
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::new(0.0, 2.5).to_string(), "[0, 2.5)");
    }

    #[test]
    fn test_total_length() {
        let set = [Interval::new(0.0, 3.0), Interval::new(5.0, 10.0)];
        assert_eq!(total_length(&set), 8.0);
        assert_eq!(total_length(&[]), 0.0);
    }

    #[test]
    fn test_sample_serialization() {
        let sample = PlaybackSample::new(5.0, 1.5);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"position":5.0,"received_at":1.5}"#);

        let back: PlaybackSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_interval_deserialization() {
        let iv: Interval = serde_json::from_str(r#"{"start":1.0,"end":4.0}"#).unwrap();
        assert_eq!(iv, Interval::new(1.0, 4.0));
    }
}
