//! Centralized path configuration for steward.
//!
//! The scratch directory is shared with the orchestration runtime (compose
//! reads manifest files from it), so all paths go through this module to
//! keep the CLI and tests consistent.

use std::path::PathBuf;

/// Get the scratch directory manifests are materialized into.
///
/// Resolution order:
/// 1. `STEWARD_MANIFEST_DIR` environment variable
/// 2. `/tmp/steward-manifests`
pub fn manifest_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STEWARD_MANIFEST_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("/tmp/steward-manifests")
}

/// Get the on-disk path for a named stack's compose document.
pub fn manifest_path(dir: &std::path::Path, stack_name: &str) -> PathBuf {
    dir.join(format!("{}.yml", stack_name))
}
