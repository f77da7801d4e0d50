//! Validate command implementation
//!
//! Compares an original and a converted snapshot and reports whether the
//! migration preserved track positions.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use trackport_session::validate::verify_migration;

use super::json_output::{JsonError, ValidateOutput};
use crate::input::load_track_list;

/// Run the validate command
///
/// # Arguments
/// * `original_path` - Path to the original (pre-migration) snapshot
/// * `converted_path` - Path to the converted (post-migration) snapshot
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the migration is intact, 1 if any check failed
pub fn run(original_path: &str, converted_path: &str, json_output: bool) -> Result<ExitCode> {
    let original = load_track_list(Path::new(original_path))
        .with_context(|| format!("Failed to load original snapshot: {}", original_path))?;
    let converted = load_track_list(Path::new(converted_path))
        .with_context(|| format!("Failed to load converted snapshot: {}", converted_path))?;

    let outcome = verify_migration(&original.list.tracks, &converted.list.tracks);

    if json_output {
        let output = match &outcome {
            Ok(fingerprint) => ValidateOutput {
                ok: true,
                fingerprint: Some(fingerprint.clone()),
                original_hash: original.source_hash,
                converted_hash: converted.source_hash,
                track_count: original.list.len(),
                error: None,
            },
            Err(err) => ValidateOutput {
                ok: false,
                fingerprint: None,
                original_hash: original.source_hash,
                converted_hash: converted.source_hash,
                track_count: original.list.len(),
                error: Some(JsonError::from_position_error(err)),
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(match outcome {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(1),
        });
    }

    println!("{} {}", "Original:".cyan().bold(), original_path);
    println!(
        "{} {} tracks ({})",
        "Source:".dimmed(),
        original.list.len(),
        &original.source_hash[..16]
    );
    println!("{} {}", "Converted:".cyan().bold(), converted_path);
    println!(
        "{} {} tracks ({})",
        "Source:".dimmed(),
        converted.list.len(),
        &converted.source_hash[..16]
    );

    match outcome {
        Ok(fingerprint) => {
            println!(
                "\n{} Migration intact, {} tracks position-locked",
                "SUCCESS".green().bold(),
                original.list.len()
            );
            println!("{} {}", "Fingerprint:".dimmed(), fingerprint);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                err.code().yellow(),
                err
            );
            if let Some(track) = err.track() {
                println!("{} {}", "Track:".dimmed(), track);
            }
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(tracks_json: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"snapshot_version": 1, "tracks": {}}}"#,
            tracks_json
        )
        .unwrap();
        file
    }

    const DRUMS: &str = r#"{"track_id": "drums-01", "name": "Drums", "index": 0,
        "start_time": 0.0, "end_time": 180.0, "track_type": "audio", "channel_count": 2}"#;

    // ExitCode has no PartialEq; compare through Debug.
    fn assert_exit(code: ExitCode, expected: ExitCode) {
        assert_eq!(format!("{:?}", code), format!("{:?}", expected));
    }

    #[test]
    fn test_validate_matching_snapshots() {
        let a = write_snapshot(&format!("[{}]", DRUMS));
        let b = write_snapshot(&format!("[{}]", DRUMS));

        let code = run(
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
            true,
        )
        .unwrap();
        assert_exit(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_validate_mismatch_exits_nonzero() {
        let widened = DRUMS.replace(r#""channel_count": 2"#, r#""channel_count": 4"#);
        let a = write_snapshot(&format!("[{}]", DRUMS));
        let b = write_snapshot(&format!("[{}]", widened));

        let code = run(
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
            true,
        )
        .unwrap();
        assert_exit(code, ExitCode::from(1));
    }

    #[test]
    fn test_validate_missing_file_is_error() {
        let a = write_snapshot(&format!("[{}]", DRUMS));
        let result = run(a.path().to_str().unwrap(), "/nonexistent/converted.json", true);
        assert!(result.is_err());
    }
}
