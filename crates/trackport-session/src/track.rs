//! Canonical track and session types.

use serde::{Deserialize, Serialize};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Track categories carried through a migration.
///
/// The category is recorded in snapshots and track maps but is not consulted
/// by any position check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    /// Audio lanes (mono, stereo, or multichannel).
    Audio,
    /// MIDI lanes.
    Midi,
    /// Auxiliary/bus lanes.
    Aux,
    /// Software-instrument lanes.
    Instrument,
    /// The master/output lane.
    Master,
}

impl TrackType {
    /// Returns the track type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Audio => "audio",
            TrackType::Midi => "midi",
            TrackType::Aux => "aux",
            TrackType::Instrument => "instrument",
            TrackType::Master => "master",
        }
    }

    /// Returns all track types.
    pub fn all() -> &'static [TrackType] {
        &[
            TrackType::Audio,
            TrackType::Midi,
            TrackType::Aux,
            TrackType::Instrument,
            TrackType::Master,
        ]
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(TrackType::Audio),
            "midi" => Ok(TrackType::Midi),
            "aux" => Ok(TrackType::Aux),
            "instrument" => Ok(TrackType::Instrument),
            "master" => Ok(TrackType::Master),
            _ => Err(format!("unknown track type: {}", s)),
        }
    }
}

/// DAW project formats recognized by migration requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DawFormat {
    /// Apple Logic Pro.
    LogicPro,
    /// Avid Pro Tools.
    ProTools,
}

impl DawFormat {
    /// Returns the format identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DawFormat::LogicPro => "logic_pro",
            DawFormat::ProTools => "pro_tools",
        }
    }
}

impl std::fmt::Display for DawFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DawFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logic_pro" => Ok(DawFormat::LogicPro),
            "pro_tools" => Ok(DawFormat::ProTools),
            _ => Err(format!("unknown DAW format: {}", s)),
        }
    }
}

/// Position-relevant metadata for one track.
///
/// A `TrackPosition` is an immutable value object produced by a project
/// analyzer or session generator. The position checks in
/// [`crate::validate`] consult `index`, `start_time`, and `channel_count`;
/// `name` and `track_type` are carried for diagnostics and snapshots only.
///
/// `end_time` is recorded so snapshots round-trip losslessly, but no check
/// reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPosition {
    /// Stable identifier, unique within a project.
    pub track_id: String,

    /// Display label. Not used for correctness checks.
    pub name: String,

    /// Vertical position within the project, zero-based.
    pub index: u32,

    /// Timeline offset of the first region, in seconds.
    pub start_time: f64,

    /// Timeline offset of the last region's end, in seconds.
    pub end_time: f64,

    /// Track category.
    pub track_type: TrackType,

    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channel_count: u32,
}

impl TrackPosition {
    /// Creates a new track position builder.
    pub fn builder(track_id: impl Into<String>, index: u32) -> TrackPositionBuilder {
        TrackPositionBuilder::new(track_id, index)
    }
}

/// Builder for [`TrackPosition`].
///
/// # Example
/// ```
/// use trackport_session::{TrackPosition, TrackType};
///
/// let track = TrackPosition::builder("drums-01", 0)
///     .name("Drums")
///     .start_time(0.0)
///     .end_time(180.0)
///     .track_type(TrackType::Audio)
///     .channel_count(2)
///     .build();
///
/// assert_eq!(track.index, 0);
/// assert_eq!(track.channel_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TrackPositionBuilder {
    track_id: String,
    name: Option<String>,
    index: u32,
    start_time: f64,
    end_time: f64,
    track_type: TrackType,
    channel_count: u32,
}

impl TrackPositionBuilder {
    /// Creates a new builder with the given id and vertical index.
    ///
    /// Defaults: mono audio track starting at 0.0 with the id as name.
    pub fn new(track_id: impl Into<String>, index: u32) -> Self {
        Self {
            track_id: track_id.into(),
            name: None,
            index,
            start_time: 0.0,
            end_time: 0.0,
            track_type: TrackType::Audio,
            channel_count: 1,
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the timeline start offset in seconds.
    pub fn start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the timeline end offset in seconds.
    pub fn end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the track category.
    pub fn track_type(mut self, track_type: TrackType) -> Self {
        self.track_type = track_type;
        self
    }

    /// Sets the channel count.
    pub fn channel_count(mut self, channel_count: u32) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Builds the track position.
    pub fn build(self) -> TrackPosition {
        let name = self.name.unwrap_or_else(|| self.track_id.clone());
        TrackPosition {
            track_id: self.track_id,
            name,
            index: self.index,
            start_time: self.start_time,
            end_time: self.end_time,
            track_type: self.track_type,
            channel_count: self.channel_count,
        }
    }
}

/// An ordered snapshot of a project's tracks.
///
/// This is the JSON unit exchanged with the external analyzer and generator:
/// the analyzer emits one for the source project, the generator emits one for
/// the converted session, and the validator compares the two. Ordering is
/// significant; see [`crate::validate::validate_positions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackList {
    /// Snapshot schema version; must be 1.
    pub snapshot_version: u32,

    /// Project display name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// DAW the snapshot was taken from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daw: Option<DawFormat>,

    /// Tracks in canonical (vertical) order.
    pub tracks: Vec<TrackPosition>,
}

impl TrackList {
    /// Creates a snapshot from a track vector.
    pub fn new(tracks: Vec<TrackPosition>) -> Self {
        Self {
            snapshot_version: SNAPSHOT_VERSION,
            project: None,
            daw: None,
            tracks,
        }
    }

    /// Sets the project name.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the source DAW.
    pub fn with_daw(mut self, daw: DawFormat) -> Self {
        self.daw = Some(daw);
        self
    }

    /// Parses a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the snapshot to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if the snapshot has no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
