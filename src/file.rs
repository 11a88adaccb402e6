// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{csv::CsvArtifact, error::ExportError};

/// Write the artifact into `dir` under its own file name. Overwrites.
/// Returns the final path written to.
pub fn save_artifact(dir: &Path, artifact: &CsvArtifact) -> Result<PathBuf, ExportError> {
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(artifact.file_name);
    fs::write(&path, artifact.contents.as_bytes())?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Nearest existing ancestor of `path`, or `.` if none exists.
pub fn nearest_existing_dir(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}
