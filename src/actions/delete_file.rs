use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use crate::errors::DeleteError;
use crate::fs::data_file_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    MissingFilename,
    IsDirectory,
    Deleted,
    NotFound,
}

/// Deletes `filename` from `data_dir`.
///
/// Only an absent or empty name counts as missing; `"0"` is a filename like any
/// other. Directories are never removed. A remove call that reports `NotFound`
/// means the entry vanished after the existence check and is treated like a
/// missing file.
pub(crate) fn execute(data_dir: &str, filename: Option<&OsStr>) -> Result<DeleteOutcome, DeleteError> {
    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::debug!("no filename provided");
            return Ok(DeleteOutcome::MissingFilename);
        }
    };

    let path = data_file_path(data_dir, filename);
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "refusing to delete a directory");
        return Ok(DeleteOutcome::IsDirectory);
    }
    if !path.exists() {
        tracing::debug!(path = %path.display(), "file not found");
        return Ok(DeleteOutcome::NotFound);
    }

    match fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "deleted file");
            Ok(DeleteOutcome::Deleted)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file vanished before removal");
            Ok(DeleteOutcome::NotFound)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "failed to delete file");
            Err(DeleteError::RemoveFailed { path, error })
        }
    }
}
