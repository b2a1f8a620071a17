//! Filesystem scanning for page entry modules.

use std::path::PathBuf;

use anyhow::{Context, Result};
use glob::glob;

/// Expand a glob pattern into the list of entry-module files it matches.
///
/// Zero matches is a valid result and yields an empty list. Individual paths
/// the walker cannot read are skipped; only a malformed pattern is an error.
pub fn scan_entry_modules(pattern: &str) -> Result<Vec<PathBuf>> {
    let matches = glob(pattern)
        .with_context(|| format!("invalid entry module pattern `{pattern}`"))?
        .filter_map(|candidate| candidate.ok())
        .filter(|path| path.is_file())
        .collect();

    Ok(matches)
}
