//! Filesystem helpers
//!
//! Thin wrappers over `std::fs` whose errors remember which path failed.
//! Nothing here retries or rolls back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A filesystem operation that failed on a specific path
#[derive(thiserror::Error, Debug)]
#[error("failed to {op} {}", .path.display())]
pub struct FsError {
    /// Operation that was attempted
    pub op: &'static str,

    /// Path the operation failed on
    pub path: PathBuf,

    /// Underlying IO error
    #[source]
    pub source: io::Error,
}

impl FsError {
    fn new(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result alias for filesystem helpers
pub type FsResult<T> = Result<T, FsError>;

/// List the entries of a directory in enumeration order
///
/// The listing is collected up front so callers may rename or delete
/// entries without disturbing the iteration.
pub fn read_dir_entries(dir: impl AsRef<Path>) -> FsResult<Vec<fs::DirEntry>> {
    let dir = dir.as_ref();
    fs::read_dir(dir)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|e| FsError::new("read directory", dir, e))
}

/// Rename `from` to `to`, replacing any existing file at `to`
pub fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FsResult<()> {
    let from = from.as_ref();
    fs::rename(from, to.as_ref()).map_err(|e| FsError::new("rename", from, e))
}

/// Create a single directory; the parent must exist
pub fn create_dir(path: impl AsRef<Path>) -> FsResult<()> {
    let path = path.as_ref();
    fs::create_dir(path).map_err(|e| FsError::new("create directory", path, e))
}

/// Recursively remove `path` if it exists
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: impl AsRef<Path>) -> FsResult<bool> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::new("remove directory", path, e)),
    }
}

/// Recursively copy the directory `src` to `dest`
///
/// Symlinks are followed. `dest` and any missing parents are created.
/// Returns the number of files copied.
pub fn copy_dir_all(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> FsResult<u64> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    let metadata = fs::metadata(src).map_err(|e| FsError::new("read metadata of", src, e))?;
    if !metadata.is_dir() {
        return Err(FsError::new(
            "copy directory",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    fs::create_dir_all(dest).map_err(|e| FsError::new("create directory", dest, e))?;

    let mut copied = 0;
    for entry in read_dir_entries(src)? {
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            copied += copy_dir_all(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| FsError::new("copy", &src_path, e))?;
            log::trace!("Copied {} to {}", src_path.display(), dest_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy the file `src` into the directory `dir`, keeping its file name
///
/// Returns the path of the copy.
pub fn copy_file_into(src: impl AsRef<Path>, dir: impl AsRef<Path>) -> FsResult<PathBuf> {
    let src = src.as_ref();
    let file_name = src.file_name().ok_or_else(|| {
        FsError::new(
            "copy",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;

    let dest = dir.as_ref().join(file_name);
    fs::copy(src, &dest).map_err(|e| FsError::new("copy", src, e))?;
    Ok(dest)
}
