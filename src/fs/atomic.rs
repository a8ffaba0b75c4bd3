//! Atomic file writes.
//!
//! Output files are written to a temporary sibling, synced, then renamed
//! into place, so a failed run leaves either no file or the previous run's
//! file untouched. Parent directories are created as needed.

use crate::error::{Result, StoresmithError};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            StoresmithError::UserError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_sibling(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    // Renaming a synced sibling is atomic on POSIX; on Windows the target
    // must be removed first.
    #[cfg(windows)]
    if path.exists() {
        let _ = fs::remove_file(path);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StoresmithError::UserError(format!(
            "failed to replace '{}': {}",
            path.display(),
            e
        ))
    })
}

fn temp_sibling(target: &Path) -> Result<std::path::PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoresmithError::UserError("invalid output path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        StoresmithError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            StoresmithError::UserError(format!("failed to write temporary file: {}", e))
        })
}
