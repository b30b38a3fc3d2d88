//! Marker file discovery and parsing.
//!
//! Discovery walks upward from the working directory. A `.tfcopen` file
//! anywhere on the path wins; a directory containing `.git` short-circuits
//! the walk and its name becomes the workspace search term.

mod schema;

pub use schema::{Config, Selector};

use std::fs;
use std::path::Path;

use crate::error::TfcopenError;

/// File name of the per-project marker file.
pub const MARKER_FILE: &str = ".tfcopen";

/// Directory entry that identifies a version-control root.
const GIT_DIR: &str = ".git";

/// Walk upward from `start` looking for a marker file or a git root.
///
/// Each directory is checked for [`MARKER_FILE`] first, then for a `.git`
/// entry. A found marker ends the walk with [`load_marker`]'s result, good
/// or bad. A git root ends it with a synthesized config (search term = the
/// directory's base name) after an informational note on stderr, since the
/// org must then come from the environment.
///
/// # Errors
///
/// Returns [`TfcopenError::ConfigNotFound`] when the filesystem root is
/// exhausted without finding either.
pub fn locate_config_from(start: &Path) -> Result<Config, TfcopenError> {
    let mut dir = start;

    loop {
        let marker = dir.join(MARKER_FILE);
        if marker.exists() {
            return load_marker(&marker);
        }

        if dir.join(GIT_DIR).exists() {
            eprintln!("found git root, guessing the terraform cloud search string from its name");
            let name = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(Config::from_repo_name(name));
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(TfcopenError::ConfigNotFound),
        }
    }
}

/// Read and validate a marker file.
///
/// # Errors
///
/// - [`TfcopenError::ConfigEmpty`] for a zero-byte file
/// - [`TfcopenError::ConfigRead`] when the file cannot be read or parsed
/// - [`TfcopenError::ConfigInvalid`] when no selector key is populated; the
///   parsed config rides along inside the error for org-only use
pub fn load_marker(path: &Path) -> Result<Config, TfcopenError> {
    let metadata = fs::metadata(path).map_err(|e| TfcopenError::ConfigRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if metadata.len() == 0 {
        return Err(TfcopenError::ConfigEmpty {
            path: path.to_path_buf(),
        });
    }

    let config = read_config(path)?;
    if !config.has_selector() {
        return Err(TfcopenError::ConfigInvalid {
            path: path.to_path_buf(),
            config,
        });
    }

    Ok(config)
}

/// Decode a marker file as YAML into a [`Config`].
pub fn read_config(path: &Path) -> Result<Config, TfcopenError> {
    let content = fs::read_to_string(path).map_err(|e| TfcopenError::ConfigRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_saphyr::from_str(&content).map_err(|e| TfcopenError::ConfigRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
