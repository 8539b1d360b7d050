//! Removal of stale autotools output.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Generated files and directories removed before regeneration,
/// relative to the project directory.
pub const STALE_ARTIFACTS: [&str; 4] =
    ["configure", "config.log", "config.status", "autom4te.cache"];

/// Remove every entry of [`STALE_ARTIFACTS`] under `project_dir`.
///
/// Returns the paths that actually existed. Missing entries are skipped.
pub fn clean_generated_artifacts(project_dir: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for name in STALE_ARTIFACTS {
        let path = project_dir.join(name);
        if remove_path_if_exists(&path)? {
            debug!(path = %path.display(), "Removed stale artifact");
            removed.push(path);
        }
    }
    Ok(removed)
}

fn remove_path_if_exists(path: &Path) -> BuildResult<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) => {
            if meta.file_type().is_dir() {
                fs::remove_dir_all(path).map_err(|e| BuildError::io(path, e))?;
            } else {
                fs::remove_file(path).map_err(|e| BuildError::io(path, e))?;
            }
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BuildError::io(path, e)),
    }
}
