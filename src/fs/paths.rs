//! Output directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// What [`ensure_output_dir`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Ensure the output directory exists, creating it and its parents if needed.
///
/// An existing non-directory at `path` is an error.
pub fn ensure_output_dir(path: &Path) -> Result<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyExists);
    }

    std::fs::create_dir_all(path).map_err(|source| Error::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(DirStatus::Created)
}

/// Write exported torrent bytes, replacing any existing file.
pub async fn write_torrent_file(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    tokio::fs::write(&path, contents).await?;
    Ok(path)
}
