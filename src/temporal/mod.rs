//! Temporal track index.
//!
//! A [`TemporalIndex`] holds time-stamped spatial records and answers
//! playback queries: the animation layer asks for the track position at
//! each displayed time step and receives an exact record, a clamped
//! boundary record, or a synthetic interpolated record.

mod index;
mod record;

pub use index::{TemporalIndex, GREAT_CIRCLE_SEGMENTS};
pub use record::{TemporalRecord, TrackPosition};
