//! Fingerprint command implementation
//!
//! Computes the deterministic position fingerprint of one snapshot so
//! separate runs (or separate machines) can compare snapshots by digest.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use trackport_session::position_fingerprint;

use super::json_output::FingerprintOutput;
use crate::input::load_track_list;

/// Run the fingerprint command
///
/// # Arguments
/// * `snapshot_path` - Path to the snapshot file
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(snapshot_path: &str, json_output: bool) -> Result<ExitCode> {
    let loaded = load_track_list(Path::new(snapshot_path))
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path))?;

    let fingerprint = position_fingerprint(&loaded.list.tracks);

    if json_output {
        let output = FingerprintOutput {
            fingerprint,
            track_count: loaded.list.len(),
            source_hash: loaded.source_hash,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Snapshot:".cyan().bold(), snapshot_path);
        println!(
            "{} {} tracks ({})",
            "Source:".dimmed(),
            loaded.list.len(),
            &loaded.source_hash[..16]
        );
        println!("{}", fingerprint);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fingerprint_runs() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"snapshot_version": 1, "tracks": [{{"track_id": "a", "name": "A",
                "index": 0, "start_time": 0.0, "end_time": 1.0,
                "track_type": "midi", "channel_count": 1}}]}}"#
        )
        .unwrap();

        run(file.path().to_str().unwrap(), true).unwrap();
    }
}
