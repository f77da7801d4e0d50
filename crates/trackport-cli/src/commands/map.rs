//! Map command implementation
//!
//! Emits the position-locked track map for a snapshot, for downstream
//! auditing of the migration.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use trackport_session::build_track_map;

use crate::input::load_track_list;

/// Run the map command
///
/// # Arguments
/// * `snapshot_path` - Path to the source snapshot file
/// * `output` - Optional output file path; stdout when absent
pub fn run(snapshot_path: &str, output: Option<&str>) -> Result<ExitCode> {
    let loaded = load_track_list(Path::new(snapshot_path))
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path))?;

    let map = build_track_map(&loaded.list.tracks);
    let json = serde_json::to_string_pretty(&map)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write track map: {}", path))?;
            println!(
                "{} {} entries -> {}",
                "Wrote:".green().bold(),
                map.track_map.len(),
                path
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
