//! Organization resolution.

use std::env;

use crate::config::Config;
use crate::error::TfcopenError;

/// Environment variable consulted when no config file supplies an org.
pub const DEFAULT_ORG_ENV: &str = "TFCOPEN_DEFAULT_ORG";

/// Determine the Terraform Cloud organization for URL construction.
///
/// A non-empty `org` key in the config wins unconditionally; otherwise the
/// [`DEFAULT_ORG_ENV`] environment variable is used when it holds a
/// non-empty value.
///
/// # Errors
///
/// Returns [`TfcopenError::OrgUnresolved`] when neither source yields an
/// org. No URL can be generated without one.
pub fn resolve_org(config: Option<&Config>) -> Result<String, TfcopenError> {
    if let Some(org) = config.and_then(|c| c.org.as_deref()) {
        if !org.is_empty() {
            return Ok(org.to_string());
        }
    }

    if let Ok(org) = env::var(DEFAULT_ORG_ENV) {
        if !org.is_empty() {
            return Ok(org);
        }
    }

    Err(TfcopenError::OrgUnresolved)
}
