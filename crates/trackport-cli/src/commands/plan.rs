//! Plan command implementation
//!
//! Emits the strict migration-request payload for the external
//! conversion-plan service.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use trackport_session::{DawFormat, MigrationRequest};

use crate::input::load_track_list;

/// Run the plan command
///
/// # Arguments
/// * `snapshot_path` - Path to the source snapshot file
/// * `source` - Source DAW format
/// * `target` - Target DAW format
/// * `output` - Optional output file path; stdout when absent
pub fn run(
    snapshot_path: &str,
    source: DawFormat,
    target: DawFormat,
    output: Option<&str>,
) -> Result<ExitCode> {
    let loaded = load_track_list(Path::new(snapshot_path))
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path))?;

    let request = MigrationRequest::strict(source, target, loaded.list.tracks);
    let json = request.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write migration request: {}", path))?;
            println!(
                "{} {} -> {} request -> {}",
                "Wrote:".green().bold(),
                source,
                target,
                path
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plan_emits_strict_request() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"snapshot_version": 1, "tracks": [{{"track_id": "a", "name": "A",
                "index": 0, "start_time": 0.0, "end_time": 1.0,
                "track_type": "audio", "channel_count": 2}}]}}"#
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("request.json");
        run(
            file.path().to_str().unwrap(),
            DawFormat::LogicPro,
            DawFormat::ProTools,
            out.to_str(),
        )
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["task"], "daw_migration");
        assert_eq!(written["source_daw"], "logic_pro");
        assert_eq!(
            written["track_mapping_requirements"]["strict_index_matching"],
            true
        );
    }
}
