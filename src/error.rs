//! Error types for the config discovery and URL resolution pipeline.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;

/// Primary error type for `tfcopen` operations.
///
/// Every variant is terminal for the current invocation; nothing is retried.
/// Messages carry the path or missing-key context the user needs to
/// self-correct.
#[derive(Error, Debug)]
pub enum TfcopenError {
    /// Walked to the filesystem root without finding a marker file or a git
    /// repository.
    #[error("reached the filesystem root without finding a .tfcopen file. cannot continue")]
    ConfigNotFound,

    /// Marker file exists but is zero bytes.
    #[error("config file found at {path} but it is empty. please add configuration keys")]
    ConfigEmpty { path: PathBuf },

    /// Marker file parsed but none of the selector keys are populated.
    ///
    /// The parsed record is carried along: an org-only file is still usable
    /// by callers that need nothing but the org, such as the registry URL.
    #[error("config file found at {path} but contains none of the expected keys (workspace, search, project). please check for typos")]
    ConfigInvalid { path: PathBuf, config: Config },

    /// I/O or YAML decode failure while reading a marker file.
    #[error("failed to read config file at {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    /// No org in any config file and `TFCOPEN_DEFAULT_ORG` is unset.
    #[error("no org was found in any config file and the TFCOPEN_DEFAULT_ORG environment variable is not set. cannot generate a link without knowing this")]
    OrgUnresolved,
}
