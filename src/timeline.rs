//! Ingestion boundary between telemetry reports and coverage resolution.
//!
//! The resolver trusts its input to be in receipt order and numerically
//! sane. [`Timeline`] enforces that as events arrive, and [`WatchTracker`]
//! hands the resolver a consistent snapshot when the timeline is shared.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use watchcover_common::{Error, PlaybackSample, Result};
use watchcover_coverage::{CoverageParams, CoverageResolver, CoverageResult};

/// A playback progress report as delivered by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Seconds into the video the client claims to be displaying.
    pub position: f64,
    /// When the report reached us.
    pub received_at: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn new(position: f64, received_at: DateTime<Utc>) -> Self {
        Self {
            position,
            received_at,
        }
    }
}

/// Receipt-ordered samples for one viewing.
///
/// Receipt times are stored as seconds since the first accepted event.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    origin: Option<DateTime<Utc>>,
    samples: Vec<PlaybackSample>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, rejecting anything the resolver must not see.
    pub fn push(&mut self, event: TelemetryEvent) -> Result<PlaybackSample> {
        if !event.position.is_finite() {
            return Err(Error::NonFinite { field: "position" });
        }
        if event.position < 0.0 {
            return Err(Error::invalid_input(format!(
                "position must be non-negative, got {}",
                event.position
            )));
        }

        let origin = *self.origin.get_or_insert(event.received_at);
        let received_at = seconds_since(origin, event.received_at);

        if let Some(last) = self.samples.last() {
            if received_at < last.received_at {
                return Err(Error::OutOfOrder {
                    previous: last.received_at,
                    received: received_at,
                });
            }
        }

        let sample = PlaybackSample::new(event.position, received_at);
        self.samples.push(sample);
        Ok(sample)
    }

    /// Copy of the samples in receipt order.
    pub fn snapshot(&self) -> Vec<PlaybackSample> {
        self.samples.clone()
    }

    pub fn samples(&self) -> &[PlaybackSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn seconds_since(origin: DateTime<Utc>, at: DateTime<Utc>) -> f64 {
    let delta = at - origin;
    delta
        .num_microseconds()
        .map(|us| us as f64 / 1_000_000.0)
        .unwrap_or_else(|| delta.num_milliseconds() as f64 / 1_000.0)
}

/// Shared timeline that recomputes coverage from full history on every report.
#[derive(Debug, Default)]
pub struct WatchTracker {
    timeline: RwLock<Timeline>,
    resolver: CoverageResolver,
}

impl WatchTracker {
    pub fn new(params: CoverageParams) -> Self {
        Self {
            timeline: RwLock::new(Timeline::new()),
            resolver: CoverageResolver::new(params),
        }
    }

    /// Record an event and return coverage over everything recorded so far.
    pub fn record(&self, event: TelemetryEvent) -> Result<CoverageResult> {
        let snapshot = {
            let mut timeline = self.timeline.write();
            if let Err(e) = timeline.push(event) {
                tracing::warn!("Rejected telemetry event at {}: {}", event.received_at, e);
                return Err(e);
            }
            timeline.snapshot()
        };

        let coverage = self.resolver.resolve(&snapshot);
        tracing::debug!(
            samples = snapshot.len(),
            valid_secs = coverage.valid_secs(),
            invalid_secs = coverage.invalid_secs(),
            "recorded telemetry event"
        );
        Ok(coverage)
    }

    /// Coverage over the current timeline.
    pub fn coverage(&self) -> CoverageResult {
        let snapshot = self.timeline.read().snapshot();
        self.resolver.resolve(&snapshot)
    }

    pub fn len(&self) -> usize {
        self.timeline.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.read().is_empty()
    }
}

/// Read a JSON array of telemetry events from `path`.
pub fn load_events(path: &Path) -> Result<Vec<TelemetryEvent>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::parse(format!("{}: {e}", path.display())))
}

/// Build a timeline from events, failing on the first rejected one.
pub fn timeline_from_events<I>(events: I) -> Result<Timeline>
where
    I: IntoIterator<Item = TelemetryEvent>,
{
    let mut timeline = Timeline::new();
    for (i, event) in events.into_iter().enumerate() {
        timeline
            .push(event)
            .map_err(|e| Error::invalid_input(format!("event {i}: {e}")))?;
    }
    Ok(timeline)
}
