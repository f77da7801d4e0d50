//! Trackport CLI library.
//!
//! This crate provides the core functionality for the Trackport CLI:
//! snapshot loading and the validate/fingerprint/map/plan commands.

pub mod commands;
pub mod input;
