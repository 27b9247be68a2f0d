use std::{io, path::PathBuf};

/// Errors raised while removing a file from the data directory.
#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    /// The OS refused to remove an entry that exists.
    #[error("Failed to delete '{path}': {error}")]
    RemoveFailed {
        /// The path that could not be removed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },
}
