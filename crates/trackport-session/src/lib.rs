//! Trackport Canonical Session Library
//!
//! This crate provides the types, validation, and fingerprinting used to
//! verify that a DAW-project track migration preserved every track's
//! position, order, timing, and channel layout. The format conversion itself
//! is performed by external collaborators (a project analyzer, a hosted
//! conversion-plan service, a session generator); this crate owns the
//! integrity contract over their output.
//!
//! # Overview
//!
//! - **Snapshots**: ordered [`TrackList`] values describing a project's
//!   tracks, one taken before and one after the migration
//! - **Validation**: positional, fail-fast comparison of the two snapshots
//! - **Fingerprints**: deterministic BLAKE3 digests over the
//!   position-relevant fields, comparable across runs and machines
//!
//! # Example
//!
//! ```
//! use trackport_session::{TrackPosition, TrackType};
//! use trackport_session::validate::verify_migration;
//! use trackport_session::fingerprint::position_fingerprint;
//!
//! let original = vec![
//!     TrackPosition::builder("drums-01", 0)
//!         .name("Drums")
//!         .start_time(0.0)
//!         .channel_count(2)
//!         .build(),
//!     TrackPosition::builder("bass-01", 1)
//!         .name("Bass")
//!         .start_time(30.0)
//!         .channel_count(1)
//!         .build(),
//! ];
//!
//! // A faithful conversion validates and yields the shared fingerprint.
//! let converted = original.clone();
//! let fingerprint = verify_migration(&original, &converted).unwrap();
//! assert_eq!(fingerprint, position_fingerprint(&original));
//! ```
//!
//! # Modules
//!
//! - [`error`]: position-violation and session error types
//! - [`track`]: canonical track and snapshot types
//! - [`validate`]: position-integrity validation
//! - [`fingerprint`]: deterministic position fingerprinting
//! - [`map`]: position-locked track-map construction
//! - [`plan`]: migration-request payload types

pub mod error;
pub mod fingerprint;
pub mod map;
pub mod plan;
pub mod track;
pub mod validate;

// Re-export commonly used types at the crate root
pub use error::PositionError;
pub use fingerprint::{format_time, position_fingerprint, position_payload};
pub use map::{build_track_map, TrackMap, TrackMapEntry, ValidationMarkers};
pub use plan::{
    MappingRequirements, MigrationRequest, PositioningRules, ValidationLevel, MIGRATION_TASK,
};
pub use track::{
    DawFormat, TrackList, TrackPosition, TrackPositionBuilder, TrackType, SNAPSHOT_VERSION,
};
pub use validate::{validate_positions, verify_migration};
