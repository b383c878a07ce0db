use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    dest_path: Q,
) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Moves a file, creating the destination's parent directories as needed.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    dest_path: Q,
) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::rename(source_path, dest_path).map_err(Error::IoError)
}

/// Copies a directory tree, skipping files that already exist at the
/// destination. Asset copies are idempotent across build kinds.
pub fn copy_tree_if_absent<P: AsRef<Path>, Q: AsRef<Path>>(
    source_root: P,
    dest_root: Q,
) -> Result<()> {
    let source_root = source_root.as_ref();
    let dest_root = dest_root.as_ref();

    for entry in WalkDir::new(source_root) {
        let entry = entry.map_err(|err| {
            Error::IoError(err.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "walkdir loop")
            }))
        })?;
        let relative = entry.path().strip_prefix(source_root).map_err(|_| {
            Error::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("'{}' escapes its walk root", entry.path().display()),
            ))
        })?;
        let dest_path = dest_root.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&dest_path)?;
        } else if !dest_path.exists() {
            copy_file(entry.path(), &dest_path)?;
        }
    }
    Ok(())
}

/// Deletes and recreates a directory. Builds are idempotent at the
/// whole-build granularity because nothing survives from a previous run.
pub fn recreate_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        std::fs::remove_dir_all(path).map_err(Error::IoError)?;
    }
    create_dir_all(path)
}
