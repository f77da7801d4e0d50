//! CLI command implementations

pub mod fingerprint;
pub mod map;
pub mod plan;
pub mod validate;

mod json_output;
