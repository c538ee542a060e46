//! Whole-file content copies with path-aware errors.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("source and destination are the same file: {path}")]
    SameFile { path: PathBuf },

    #[error("I/O error for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::NotAFile { path }
            | FsError::ParentNotFound { path }
            | FsError::SameFile { path }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Replaces the content of `to` with the content of `from`.
///
/// The destination is created if needed and truncated otherwise; its
/// permissions and timestamps are left alone. Returns the number of bytes
/// copied.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `from` doesn't exist.
/// Returns `FsError::NotAFile` if `from` is a directory or other non-file.
/// Returns `FsError::SameFile` if `from` and `to` resolve to one file.
/// Returns `FsError::ParentNotFound` if the directory holding `to` is missing.
/// Returns `FsError::PermissionDenied` if either side is not accessible.
pub fn copy_contents(from: &Path, to: &Path) -> Result<u64, FsError> {
    let meta = std::fs::metadata(from).map_err(|e| FsError::from_io(from, e))?;
    if !meta.is_file() {
        return Err(FsError::NotAFile { path: from.into() });
    }

    if is_same_file(from, to) {
        return Err(FsError::SameFile { path: to.into() });
    }

    // Only a definite "absent" counts; other failures are classified by create.
    let parent_missing = to.parent().is_some_and(|parent| {
        !parent.as_os_str().is_empty() && matches!(parent.try_exists(), Ok(false))
    });
    if parent_missing {
        return Err(FsError::ParentNotFound { path: to.into() });
    }

    let mut src = File::open(from).map_err(|e| FsError::from_io(from, e))?;
    let mut dst = File::create(to).map_err(|e| FsError::from_io(to, e))?;
    io::copy(&mut src, &mut dst).map_err(|e| FsError::from_io(to, e))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
