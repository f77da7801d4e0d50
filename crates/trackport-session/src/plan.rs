//! Migration-request payload types.
//!
//! The conversion plan itself is produced by an external hosted service; this
//! module only models the advisory request payload sent to it. The flags are
//! context for that service, not something the validator enforces — the core
//! re-checks the *outcome* via [`crate::validate`].

use serde::{Deserialize, Serialize};

use crate::track::{DawFormat, TrackPosition};

/// Task identifier sent with every migration request.
pub const MIGRATION_TASK: &str = "daw_migration";

/// How strictly the external service should treat the positioning rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLevel {
    /// Every rule is binding; any deviation fails the plan.
    Strict,
    /// Rules are advisory; deviations are reported but tolerated.
    Lenient,
}

/// Vertical-order and spacing rules for the target session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositioningRules {
    /// Keep tracks in the same top-to-bottom order.
    pub maintain_vertical_order: bool,
    /// Keep the gaps between track start times.
    pub preserve_track_spacing: bool,
    /// Pin every track's start position.
    pub lock_start_positions: bool,
}

impl PositioningRules {
    /// Rules with every position guarantee enabled.
    pub fn locked() -> Self {
        Self {
            maintain_vertical_order: true,
            preserve_track_spacing: true,
            lock_start_positions: true,
        }
    }
}

/// Track-mapping requirements attached to a migration request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRequirements {
    /// Keep absolute timeline positions.
    pub preserve_absolute_positions: bool,
    /// Keep each track's channel layout.
    pub maintain_channel_configuration: bool,
    /// Require target indices to equal source indices.
    pub strict_index_matching: bool,
    /// How binding these requirements are.
    pub validation_level: ValidationLevel,
    /// The source track structure, in canonical order.
    pub track_structure: Vec<TrackPosition>,
    /// Order and spacing rules.
    pub positioning_rules: PositioningRules,
}

/// The request payload handed to the external conversion-plan service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationRequest {
    /// Task name; always [`MIGRATION_TASK`].
    pub task: String,
    /// Format the project is migrating from.
    pub source_daw: DawFormat,
    /// Format the project is migrating to.
    pub target_daw: DawFormat,
    /// Track-mapping requirements.
    pub track_mapping_requirements: MappingRequirements,
}

impl MigrationRequest {
    /// Builds the strict, all-guarantees-on request used for position-locked
    /// migrations.
    ///
    /// # Example
    /// ```
    /// use trackport_session::plan::{MigrationRequest, ValidationLevel};
    /// use trackport_session::{DawFormat, TrackPosition};
    ///
    /// let tracks = vec![TrackPosition::builder("drums-01", 0).build()];
    /// let request =
    ///     MigrationRequest::strict(DawFormat::LogicPro, DawFormat::ProTools, tracks);
    ///
    /// assert_eq!(request.task, "daw_migration");
    /// assert_eq!(
    ///     request.track_mapping_requirements.validation_level,
    ///     ValidationLevel::Strict
    /// );
    /// ```
    pub fn strict(
        source_daw: DawFormat,
        target_daw: DawFormat,
        track_structure: Vec<TrackPosition>,
    ) -> Self {
        Self {
            task: MIGRATION_TASK.to_string(),
            source_daw,
            target_daw,
            track_mapping_requirements: MappingRequirements {
                preserve_absolute_positions: true,
                maintain_channel_configuration: true,
                strict_index_matching: true,
                validation_level: ValidationLevel::Strict,
                track_structure,
                positioning_rules: PositioningRules::locked(),
            },
        }
    }

    /// Serializes the request to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strict_request_flags() {
        let tracks = vec![TrackPosition::builder("drums-01", 0).build()];
        let request = MigrationRequest::strict(DawFormat::LogicPro, DawFormat::ProTools, tracks);

        let req = &request.track_mapping_requirements;
        assert!(req.preserve_absolute_positions);
        assert!(req.maintain_channel_configuration);
        assert!(req.strict_index_matching);
        assert_eq!(req.validation_level, ValidationLevel::Strict);
        assert!(req.positioning_rules.maintain_vertical_order);
        assert!(req.positioning_rules.preserve_track_spacing);
        assert!(req.positioning_rules.lock_start_positions);
    }

    #[test]
    fn test_request_wire_shape() {
        let tracks = vec![TrackPosition::builder("bass-01", 1)
            .start_time(30.0)
            .build()];
        let request = MigrationRequest::strict(DawFormat::LogicPro, DawFormat::ProTools, tracks);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["task"], "daw_migration");
        assert_eq!(value["source_daw"], "logic_pro");
        assert_eq!(value["target_daw"], "pro_tools");
        assert_eq!(
            value["track_mapping_requirements"]["validation_level"],
            "strict"
        );
        assert_eq!(
            value["track_mapping_requirements"]["track_structure"][0]["index"],
            1
        );
        assert_eq!(
            value["track_mapping_requirements"]["positioning_rules"]["lock_start_positions"],
            true
        );
    }

    #[test]
    fn test_request_json_round_trip() {
        let tracks = vec![TrackPosition::builder("keys-01", 2)
            .start_time(60.5)
            .channel_count(2)
            .build()];
        let request = MigrationRequest::strict(DawFormat::LogicPro, DawFormat::ProTools, tracks);

        let json = request.to_json_pretty().unwrap();
        let parsed: MigrationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
