//! Input abstraction for loading track-list snapshots.
//!
//! Snapshots are JSON files produced by the external project analyzer or
//! session generator. Loading records the BLAKE3 hash of the source bytes so
//! reports can state exactly which file was checked.

use std::path::{Path, PathBuf};

use trackport_session::TrackList;

/// Recognized snapshot extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Result of loading a snapshot file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed snapshot.
    pub list: TrackList,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur during snapshot loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// The snapshot schema version is not supported.
    UnsupportedVersion { version: u32 },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::UnsupportedVersion { version } => {
                write!(
                    f,
                    "unsupported snapshot_version {} (expected {})",
                    version,
                    trackport_session::SNAPSHOT_VERSION
                )
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a track-list snapshot from a file path.
///
/// # Arguments
/// * `path` - Path to the snapshot file (.json)
///
/// # Returns
/// * `Ok(LoadResult)` - Successfully loaded and parsed snapshot
/// * `Err(InputError)` - File read, extension, or parse error
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use trackport_cli::input::load_track_list;
///
/// let result = load_track_list(Path::new("original.json")).unwrap();
/// println!("Loaded {} tracks", result.list.len());
/// ```
pub fn load_track_list(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => load_json_snapshot(path),
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

fn load_json_snapshot(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let list = TrackList::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    if list.snapshot_version != trackport_session::SNAPSHOT_VERSION {
        return Err(InputError::UnsupportedVersion {
            version: list.snapshot_version,
        });
    }

    Ok(LoadResult { list, source_hash })
}
