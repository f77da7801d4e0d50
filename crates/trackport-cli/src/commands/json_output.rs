//! Machine-readable output shapes for `--json` mode.

use serde::Serialize;
use trackport_session::PositionError;

/// A position violation in JSON diagnostics.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Stable error code (e.g., "E003").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Offending track name, where one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
}

impl JsonError {
    /// Converts a position error into its JSON shape.
    pub fn from_position_error(err: &PositionError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            track: err.track().map(|t| t.to_string()),
        }
    }
}

/// Output of `trackport validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Whether the migration passed the integrity check.
    pub ok: bool,
    /// Shared fingerprint of both snapshots when the check passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Source hash of the original snapshot file.
    pub original_hash: String,
    /// Source hash of the converted snapshot file.
    pub converted_hash: String,
    /// Track count of the original snapshot.
    pub track_count: usize,
    /// The violation, when the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Output of `trackport fingerprint --json`.
#[derive(Debug, Serialize)]
pub struct FingerprintOutput {
    /// Position fingerprint of the snapshot.
    pub fingerprint: String,
    /// Number of tracks covered.
    pub track_count: usize,
    /// Source hash of the snapshot file.
    pub source_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_shape() {
        let err = PositionError::TimingMismatch {
            track: "Bass".into(),
            position: 1,
            original_start: 30.0,
            converted_start: 30.5,
        };

        let json = serde_json::to_value(JsonError::from_position_error(&err)).unwrap();
        assert_eq!(json["code"], "E003");
        assert_eq!(json["track"], "Bass");
    }

    #[test]
    fn test_validate_output_omits_empty_fields() {
        let out = ValidateOutput {
            ok: true,
            fingerprint: Some("ab".repeat(32)),
            original_hash: "cd".repeat(32),
            converted_hash: "cd".repeat(32),
            track_count: 2,
            error: None,
        };

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["ok"], true);
        assert!(json.get("error").is_none());
    }
}
