//! Error types for position validation.

use thiserror::Error;

/// A position-integrity violation.
///
/// Validation is fail-fast: the first violation found aborts the whole check
/// and the migration must be treated as failed, never partially applied.
/// Each kind carries the offending track's display name and the paired
/// position where one exists, plus a stable code via [`PositionError::code`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// The two snapshots disagree on how many tracks exist.
    #[error("track count mismatch: original has {original} tracks, converted has {converted}")]
    TrackCountMismatch {
        /// Track count in the original snapshot.
        original: usize,
        /// Track count in the converted snapshot.
        converted: usize,
    },

    /// A paired track's vertical index changed.
    #[error(
        "track position mismatch: '{track}' at position {position} moved from index {original_index} to {converted_index}"
    )]
    PositionMismatch {
        /// Display name of the original track at the paired position.
        track: String,
        /// Zero-based position of the pair within the snapshots.
        position: usize,
        /// Index recorded in the original snapshot.
        original_index: u32,
        /// Index recorded in the converted snapshot.
        converted_index: u32,
    },

    /// A paired track's start time changed.
    ///
    /// Start times are compared with exact `f64` equality; upstream is
    /// expected to carry exact values through the conversion.
    #[error(
        "track timing mismatch: '{track}' at position {position} moved from {original_start}s to {converted_start}s"
    )]
    TimingMismatch {
        /// Display name of the original track at the paired position.
        track: String,
        /// Zero-based position of the pair within the snapshots.
        position: usize,
        /// Start time recorded in the original snapshot.
        original_start: f64,
        /// Start time recorded in the converted snapshot.
        converted_start: f64,
    },

    /// A paired track's channel layout changed.
    #[error(
        "channel count mismatch: '{track}' at position {position} changed from {original_channels} to {converted_channels} channels"
    )]
    ChannelMismatch {
        /// Display name of the original track at the paired position.
        track: String,
        /// Zero-based position of the pair within the snapshots.
        position: usize,
        /// Channel count recorded in the original snapshot.
        original_channels: u32,
        /// Channel count recorded in the converted snapshot.
        converted_channels: u32,
    },

    /// Fingerprints diverged after the field-by-field check passed.
    ///
    /// With the current fingerprint definition this cannot fire when
    /// [`crate::validate::validate_positions`] already succeeded; it is kept
    /// as defense-in-depth should the fingerprint ever cover more fields than
    /// the pairwise check.
    #[error(
        "track position integrity check failed: fingerprints diverged ({original_fingerprint} vs {converted_fingerprint})"
    )]
    IntegrityCheckFailed {
        /// Fingerprint of the original snapshot.
        original_fingerprint: String,
        /// Fingerprint of the converted snapshot.
        converted_fingerprint: String,
    },
}

impl PositionError {
    /// Returns the stable error code (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            PositionError::TrackCountMismatch { .. } => "E001",
            PositionError::PositionMismatch { .. } => "E002",
            PositionError::TimingMismatch { .. } => "E003",
            PositionError::ChannelMismatch { .. } => "E004",
            PositionError::IntegrityCheckFailed { .. } => "E005",
        }
    }

    /// Returns the display name of the offending track, where one exists.
    ///
    /// Count and fingerprint mismatches concern whole snapshots and have no
    /// single offending track.
    pub fn track(&self) -> Option<&str> {
        match self {
            PositionError::PositionMismatch { track, .. }
            | PositionError::TimingMismatch { track, .. }
            | PositionError::ChannelMismatch { track, .. } => Some(track),
            PositionError::TrackCountMismatch { .. }
            | PositionError::IntegrityCheckFailed { .. } => None,
        }
    }
}
