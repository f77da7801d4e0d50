//! Track-map construction for position-locked migrations.
//!
//! A [`TrackMap`] declares, per track, where the migration must place it in
//! the target session. Because Trackport migrations are position-locked, the
//! target index always equals the source index; the map exists so downstream
//! auditing has an explicit record of the intent, not because any
//! re-indexing happens here.

use serde::{Deserialize, Serialize};

use crate::fingerprint::format_time;
use crate::track::{TrackPosition, TrackType};

/// Marker strings consumed by downstream auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMarkers {
    /// Position marker, `pos_<index>`.
    pub position_check: String,
    /// Timing marker, `time_<start_time>` with canonical time rendering.
    pub timing_check: String,
}

/// One position-locked mapping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMapEntry {
    /// Vertical index in the source project.
    pub source_index: u32,
    /// Vertical index in the target session; always equals `source_index`.
    pub target_index: u32,
    /// Whether the entry's position is locked. Always true.
    pub position_locked: bool,
    /// Channel layout to carry over.
    pub channel_config: u32,
    /// Timeline start offset to carry over, in seconds.
    pub start_time: f64,
    /// Track category to carry over.
    pub track_type: TrackType,
    /// Audit markers.
    pub validation_markers: ValidationMarkers,
}

/// A complete position-locked track map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMap {
    /// Per-track mapping entries, in source order.
    pub track_map: Vec<TrackMapEntry>,
    /// Whether position-integrity checks apply to this map. Always true.
    pub position_integrity_checks: bool,
}

/// Builds a position-locked track map from a source track list.
///
/// Pure transform, no validation: every track maps to its own index with
/// `position_locked` set, and the audit markers are derived from the source
/// fields.
///
/// # Example
/// ```
/// use trackport_session::TrackPosition;
/// use trackport_session::map::build_track_map;
///
/// let tracks = vec![TrackPosition::builder("drums-01", 0)
///     .start_time(7.5)
///     .channel_count(2)
///     .build()];
///
/// let map = build_track_map(&tracks);
/// assert_eq!(map.track_map[0].target_index, 0);
/// assert_eq!(map.track_map[0].validation_markers.timing_check, "time_7.5");
/// ```
pub fn build_track_map(source: &[TrackPosition]) -> TrackMap {
    let track_map = source
        .iter()
        .map(|track| TrackMapEntry {
            source_index: track.index,
            target_index: track.index,
            position_locked: true,
            channel_config: track.channel_count,
            start_time: track.start_time,
            track_type: track.track_type,
            validation_markers: ValidationMarkers {
                position_check: format!("pos_{}", track.index),
                timing_check: format!("time_{}", format_time(track.start_time)),
            },
        })
        .collect();

    TrackMap {
        track_map,
        position_integrity_checks: true,
    }
}
