//! Eligible-file collection.
//!
//! Produces the static listing snapshot a batch run plans against. Flat mode
//! reads a single directory; recursive mode walks the whole tree. In both
//! modes hidden files are skipped, only image extensions survive, and the
//! result is sorted so batch order is deterministic regardless of what the
//! filesystem returns.
//!
//! A missing folder is the one error that aborts a run before any planning.

use crate::plan::is_eligible;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("folder does not exist: {0}")]
    FolderNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Collects image files under `folder`, sorted by path.
pub fn collect_images(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if !folder.is_dir() {
        return Err(ScanError::FolderNotFound(folder.to_path_buf()));
    }

    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(folder).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .map(ScanError::Io)
                    .unwrap_or_else(|| ScanError::FolderNotFound(folder.to_path_buf()))
            })?;
            let path = entry.path();
            if path.is_file() && !is_hidden(path) && is_eligible(path) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if path.is_file() && !is_hidden(&path) && is_eligible(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
