//! Position-integrity validation.
//!
//! The validator enforces that a migration did not alter any track's
//! position, order, timing, or channel layout. It is pure and synchronous:
//! no I/O, no shared state, safe to call from any number of threads.

use crate::error::PositionError;
use crate::fingerprint::position_fingerprint;
use crate::track::TrackPosition;

/// Validates track positions between an original and a converted snapshot.
///
/// Pairing is **positional**: element `i` of `original` is compared against
/// element `i` of `converted`, never matched up by `track_id` or by `index`
/// value. Callers must present both snapshots in the same canonical
/// (vertical) order; this is a documented contract, not something the
/// validator can detect on its own.
///
/// Checks run in order and the first violation aborts the whole check:
/// 1. Equal track count
/// 2. Equal `index` at each paired position
/// 3. Equal `start_time` at each paired position (exact `f64` equality)
/// 4. Equal `channel_count` at each paired position
///
/// Two empty snapshots validate vacuously.
///
/// # Example
/// ```
/// use trackport_session::TrackPosition;
/// use trackport_session::validate::validate_positions;
///
/// let tracks = vec![
///     TrackPosition::builder("drums-01", 0).channel_count(2).build(),
///     TrackPosition::builder("bass-01", 1).start_time(30.0).build(),
/// ];
///
/// assert!(validate_positions(&tracks, &tracks).is_ok());
/// ```
pub fn validate_positions(
    original: &[TrackPosition],
    converted: &[TrackPosition],
) -> Result<(), PositionError> {
    if original.len() != converted.len() {
        return Err(PositionError::TrackCountMismatch {
            original: original.len(),
            converted: converted.len(),
        });
    }

    for (position, (orig, conv)) in original.iter().zip(converted.iter()).enumerate() {
        if orig.index != conv.index {
            return Err(PositionError::PositionMismatch {
                track: orig.name.clone(),
                position,
                original_index: orig.index,
                converted_index: conv.index,
            });
        }
        if orig.start_time != conv.start_time {
            return Err(PositionError::TimingMismatch {
                track: orig.name.clone(),
                position,
                original_start: orig.start_time,
                converted_start: conv.start_time,
            });
        }
        if orig.channel_count != conv.channel_count {
            return Err(PositionError::ChannelMismatch {
                track: orig.name.clone(),
                position,
                original_channels: orig.channel_count,
                converted_channels: conv.channel_count,
            });
        }
    }

    Ok(())
}

/// Runs the full integrity check: field-by-field validation, then a
/// fingerprint comparison over the position-relevant fields.
///
/// Returns the shared fingerprint on success. The fingerprint comparison is
/// defense-in-depth: with the current fingerprint definition it cannot fail
/// once [`validate_positions`] has passed, but it keeps the two checks honest
/// should either ever cover different fields.
pub fn verify_migration(
    original: &[TrackPosition],
    converted: &[TrackPosition],
) -> Result<String, PositionError> {
    validate_positions(original, converted)?;

    let original_fingerprint = position_fingerprint(original);
    let converted_fingerprint = position_fingerprint(converted);
    if original_fingerprint != converted_fingerprint {
        return Err(PositionError::IntegrityCheckFailed {
            original_fingerprint,
            converted_fingerprint,
        });
    }

    Ok(original_fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackType;
    use pretty_assertions::assert_eq;

    fn sample_tracks() -> Vec<TrackPosition> {
        vec![
            TrackPosition::builder("drums-01", 0)
                .name("Drums")
                .start_time(0.0)
                .end_time(180.0)
                .channel_count(2)
                .build(),
            TrackPosition::builder("bass-01", 1)
                .name("Bass")
                .start_time(30.0)
                .end_time(180.0)
                .channel_count(1)
                .build(),
            TrackPosition::builder("keys-01", 2)
                .name("Keys")
                .start_time(60.5)
                .end_time(175.0)
                .track_type(TrackType::Instrument)
                .channel_count(2)
                .build(),
        ]
    }

    #[test]
    fn test_identity_validates() {
        let tracks = sample_tracks();
        assert!(validate_positions(&tracks, &tracks).is_ok());
    }

    #[test]
    fn test_empty_snapshots_validate() {
        assert!(validate_positions(&[], &[]).is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted.pop();

        let err = validate_positions(&original, &converted).unwrap_err();
        assert_eq!(
            err,
            PositionError::TrackCountMismatch {
                original: 3,
                converted: 2,
            }
        );
    }

    #[test]
    fn test_order_swap_is_position_mismatch() {
        // Swapping two elements while keeping their own index fields intact
        // trips the positional pairing: position 0 now pairs index 0 vs 1.
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted.swap(0, 1);

        let err = validate_positions(&original, &converted).unwrap_err();
        assert_eq!(
            err,
            PositionError::PositionMismatch {
                track: "Drums".to_string(),
                position: 0,
                original_index: 0,
                converted_index: 1,
            }
        );
    }

    #[test]
    fn test_timing_mismatch_is_exact() {
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted[1].start_time = 30.0000001;

        let err = validate_positions(&original, &converted).unwrap_err();
        assert_eq!(err.code(), "E003");
        assert_eq!(err.track(), Some("Bass"));
    }

    #[test]
    fn test_channel_mismatch_names_track() {
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted[1].channel_count = 2;

        let err = validate_positions(&original, &converted).unwrap_err();
        assert_eq!(
            err,
            PositionError::ChannelMismatch {
                track: "Bass".to_string(),
                position: 1,
                original_channels: 1,
                converted_channels: 2,
            }
        );
    }

    #[test]
    fn test_name_change_passes() {
        // Names and track ids are diagnostic only.
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted[0].name = "Percussion".to_string();
        converted[0].track_id = "perc-01".to_string();

        assert!(validate_positions(&original, &converted).is_ok());
    }

    #[test]
    fn test_fail_fast_reports_first_violation() {
        // Both a timing and a channel violation on the same pair: timing wins
        // because it is checked first.
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted[0].start_time = 1.0;
        converted[0].channel_count = 4;

        let err = validate_positions(&original, &converted).unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_verify_migration_returns_fingerprint() {
        let tracks = sample_tracks();
        let fp = verify_migration(&tracks, &tracks).unwrap();
        assert_eq!(fp, position_fingerprint(&tracks));
        assert_eq!(fp.len(), 64);
    }

    #[test]
    fn test_verify_migration_propagates_field_errors() {
        let original = sample_tracks();
        let mut converted = sample_tracks();
        converted[2].index = 5;

        let err = verify_migration(&original, &converted).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert_eq!(err.track(), Some("Keys"));
    }
}
