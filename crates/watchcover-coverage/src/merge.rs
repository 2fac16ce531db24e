//! Second pass: collapse an interval set into sorted, disjoint ranges.
//!
//! Touching intervals merge as well as overlapping ones, so a merged set
//! never contains `a.end == b.start` for neighbours `a`, `b`.

use watchcover_common::Interval;

/// Whether `interval` has comparable endpoints with `start <= end`.
///
/// NaN endpoints or reversed ranges cover nothing and are dropped by both
/// [`merge`] and [`insert_merged`].
fn is_ordered(interval: &Interval) -> bool {
    interval.start <= interval.end
}

/// Merge `intervals` into the minimal sorted set covering the same positions.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(is_ordered);
    // sort_by is stable: equal starts keep their input order
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut kept: Vec<Interval> = Vec::with_capacity(intervals.len());
    for current in intervals {
        match kept.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => kept.push(current),
        }
    }
    kept
}

/// Insert `interval` into an already merged set, keeping it merged.
///
/// Produces the same set as pushing `interval` and calling [`merge`] again.
pub fn insert_merged(set: &mut Vec<Interval>, interval: Interval) {
    if !is_ordered(&interval) {
        return;
    }

    let lo = set.partition_point(|kept| kept.end < interval.start);
    let hi = set.partition_point(|kept| kept.start <= interval.end);

    if lo >= hi {
        set.insert(lo, interval);
        return;
    }

    let merged = Interval::new(
        set[lo].start.min(interval.start),
        set[hi - 1].end.max(interval.end),
    );
    set.splice(lo..hi, std::iter::once(merged));
}
