//! Deterministic position fingerprinting.
//!
//! This module implements the determinism policy for Trackport:
//! - A canonical composite key per track over the position-relevant fields
//! - Canonical number rendering so times format identically on every platform
//! - BLAKE3 hashing for fingerprints
//!
//! The fingerprint is stable across calls, processes, and platforms, so two
//! snapshots taken by independent runs can be compared by fingerprint alone.

use crate::track::TrackPosition;

/// Computes the position fingerprint of a track list.
///
/// The fingerprint is computed as:
/// ```text
/// fingerprint = hex(BLAKE3(join("\n", "{index}:{start_time}:{channel_count}" per track)))
/// ```
///
/// with times rendered by [`format_time`]. Only `index`, `start_time`, and
/// `channel_count` participate; renaming a track or changing its type does
/// not change the fingerprint.
///
/// # Arguments
/// * `tracks` - The tracks in canonical order
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use trackport_session::TrackPosition;
/// use trackport_session::fingerprint::position_fingerprint;
///
/// let tracks = vec![
///     TrackPosition::builder("drums-01", 0).channel_count(2).build(),
///     TrackPosition::builder("bass-01", 1).start_time(30.0).build(),
/// ];
///
/// let fp = position_fingerprint(&tracks);
/// assert_eq!(fp.len(), 64);
/// assert_eq!(fp, position_fingerprint(&tracks));
/// ```
pub fn position_fingerprint(tracks: &[TrackPosition]) -> String {
    blake3_hash_str(&position_payload(tracks))
}

/// Builds the canonical pre-hash payload for a track list.
///
/// Exposed so callers can log or diff the exact bytes that were hashed.
pub fn position_payload(tracks: &[TrackPosition]) -> String {
    let keys: Vec<String> = tracks.iter().map(composite_key).collect();
    keys.join("\n")
}

/// Builds the composite key for one track: `index:start_time:channel_count`.
fn composite_key(track: &TrackPosition) -> String {
    format!(
        "{}:{}:{}",
        track.index,
        format_time(track.start_time),
        track.channel_count
    )
}

/// Renders a time value canonically.
///
/// Rules (RFC 8785 style, so `30.0` renders the same everywhere):
/// - Integer-valued times render without a fractional part (`0.0` → `0`)
/// - No trailing zeros after the decimal point
/// - Non-finite values render as `null`
pub fn format_time(t: f64) -> String {
    if t.is_nan() || t.is_infinite() {
        return "null".to_string();
    }
    if t == 0.0 {
        return "0".to_string();
    }
    if t.fract() == 0.0 && t.abs() < 1e15 {
        return format!("{}", t as i64);
    }
    let s = format!("{}", t);
    if s.contains('.') && !s.contains('e') && !s.contains('E') {
        return s.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    s
}

/// Computes a BLAKE3 hash of arbitrary data.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
