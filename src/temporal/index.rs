//! Time-ordered track index with interpolating queries.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use super::record::{TemporalRecord, TrackPosition};
use crate::geo::great_circle_path;

/// Number of segments the great-circle path is sampled at during
/// geographic interpolation.
///
/// Geographic queries snap to the nearest of these quantized samples
/// rather than computing a closed-form intermediate point. The
/// quantization is intentional: playback paths rendered from this index
/// must not shift when the interpolation internals change.
pub const GREAT_CIRCLE_SEGMENTS: usize = 100;

/// Ordered collection of [`TemporalRecord`]s keyed by timestamp.
///
/// Records are stored under a (timestamp, insertion sequence) key, so
/// ties between equal timestamps break deterministically toward the
/// record inserted first. Running min/max timestamp bounds are
/// maintained incrementally on insert.
///
/// Mutation and querying may interleave safely only under external
/// mutual exclusion; the index provides no locking.
#[derive(Debug, Default)]
pub struct TemporalIndex {
    records: BTreeMap<(i64, u64), TemporalRecord>,
    next_seq: u64,
    bounds: Option<(i64, i64)>,
}

impl TemporalIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_seq: 0,
            bounds: None,
        }
    }

    /// Insert a record. O(log n); bounds update in O(1).
    pub fn insert(&mut self, record: TemporalRecord) {
        let t = record.timestamp;
        self.bounds = Some(match self.bounds {
            None => (t, t),
            Some((min, max)) => (min.min(t), max.max(t)),
        });

        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.insert((t, seq), record);
    }

    /// The (earliest, latest) timestamps, or `None` for an empty index.
    ///
    /// Always equal to the true min/max of the stored records; no
    /// sentinel values.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        self.bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record nearest in time to `time`.
    ///
    /// Exact matches win; otherwise the smaller absolute time distance,
    /// with the earlier record winning a distance tie. `None` on an
    /// empty index.
    pub fn nearest(&self, time: i64) -> Option<&TemporalRecord> {
        if let Some(exact) = self.first_at(time) {
            return Some(exact);
        }

        let before = self.last_before(time);
        let after = self.first_after(time);
        match (before, after) {
            (Some(prev), Some(next)) => {
                // Earlier record wins the tie
                if time - prev.timestamp <= next.timestamp - time {
                    Some(prev)
                } else {
                    Some(next)
                }
            }
            (Some(prev), None) => Some(prev),
            (None, Some(next)) => Some(next),
            (None, None) => None,
        }
    }

    /// The record at `time`, clamped, exact, or interpolated.
    ///
    /// - empty index: `None`;
    /// - `time` outside the bounds: the boundary record (clamped, no
    ///   extrapolation);
    /// - `time` equal to a stored timestamp: that record, the first
    ///   inserted among equals;
    /// - otherwise a synthetic record at `time` interpolated between the
    ///   tightest enclosing pair: linearly for planar positions, along
    ///   a quantized great-circle path for geographic ones. A pair in
    ///   mixed reference frames cannot be blended; the enclosing record
    ///   nearer in time is returned instead.
    pub fn query(&self, time: i64) -> Option<TemporalRecord> {
        if let Some(exact) = self.first_at(time) {
            return Some(*exact);
        }

        let (min, max) = self.bounds?;
        if time < min {
            return self.first_at(min).copied();
        }
        if time > max {
            return self.first_at(max).copied();
        }

        // min < time < max and no exact match, so both neighbors exist
        let prev = self.last_before(time)?;
        let next = self.first_after(time)?;
        Some(interpolate(prev, next, time))
    }

    /// First-inserted record with exactly this timestamp.
    fn first_at(&self, time: i64) -> Option<&TemporalRecord> {
        self.records
            .range((time, 0)..=(time, u64::MAX))
            .map(|(_, record)| record)
            .next()
    }

    /// Latest record strictly before `time` (last inserted among equal
    /// timestamps).
    fn last_before(&self, time: i64) -> Option<&TemporalRecord> {
        self.records
            .range(..(time, 0))
            .map(|(_, record)| record)
            .next_back()
    }

    /// Earliest record strictly after `time` (first inserted among equal
    /// timestamps).
    fn first_after(&self, time: i64) -> Option<&TemporalRecord> {
        self.records
            .range((Excluded((time, u64::MAX)), Unbounded))
            .map(|(_, record)| record)
            .next()
    }
}

/// Synthesize a record at `time` between the enclosing pair.
fn interpolate(prev: &TemporalRecord, next: &TemporalRecord, time: i64) -> TemporalRecord {
    let span = (next.timestamp - prev.timestamp) as f64;
    let fraction = (time - prev.timestamp) as f64 / span;

    let position = match (prev.position, next.position) {
        (TrackPosition::Planar { x: x1, y: y1 }, TrackPosition::Planar { x: x2, y: y2 }) => {
            TrackPosition::Planar {
                x: x1 + (x2 - x1) * fraction,
                y: y1 + (y2 - y1) * fraction,
            }
        }
        (
            TrackPosition::Geographic {
                lat: lat1,
                lon: lon1,
            },
            TrackPosition::Geographic {
                lat: lat2,
                lon: lon2,
            },
        ) => {
            let path = great_circle_path((lat1, lon1), (lat2, lon2), GREAT_CIRCLE_SEGMENTS);
            let index = (fraction * GREAT_CIRCLE_SEGMENTS as f64).round() as usize;
            let (lat, lon) = path[index.min(GREAT_CIRCLE_SEGMENTS)];
            TrackPosition::Geographic { lat, lon }
        }
        // Mixed reference frames cannot be blended; snap to the
        // enclosing record nearer in time, earlier winning the tie
        _ => {
            return if time - prev.timestamp <= next.timestamp - time {
                *prev
            } else {
                *next
            };
        }
    };

    TemporalRecord::new(time, position)
}
