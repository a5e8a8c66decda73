//! Error types for Public Suffix List loading.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a suffix list.
#[derive(Debug, Error)]
pub enum ListError {
    /// The list file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the list file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ListError`].
pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = ListError::Read {
            path: Utf8PathBuf::from("/nonexistent/public_suffix_list.dat"),
            source: std::io::Error::other("no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/public_suffix_list.dat"));
        assert!(msg.contains("no such file"));
    }
}
