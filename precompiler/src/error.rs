//! Error types for the Public Suffix List precompiler.
//!
//! Each fatal error maps onto the process exit code contract of the CLI:
//! `2` for failures before any output exists (list load, binary-mode
//! minimizer), `3` when an output or intermediate file cannot be opened, and
//! `4` when the output cannot be written out cleanly.

use camino::Utf8PathBuf;
use psl_list::ListError;
use thiserror::Error;

/// Errors that can occur during precompilation.
#[derive(Debug, Error)]
pub enum PrecompileError {
    /// The suffix list could not be loaded.
    #[error("failed to load suffix list: {source}")]
    Load {
        /// The loader's error.
        #[from]
        source: ListError,
    },

    /// The minimizer failed while writing a binary artefact.
    #[error("failed to execute {program}: {reason}")]
    Minimizer {
        /// The minimizer program that was invoked.
        program: String,
        /// Description of the failure.
        reason: String,
    },

    /// An intermediate temp file could not be created or written.
    #[error("failed to write intermediate file: {source}")]
    Intermediate {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be opened for writing.
    #[error("failed to open {path} for writing: {source}")]
    OutputOpen {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be flushed and closed cleanly.
    #[error("failed to close {path}: {source}")]
    OutputClose {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An external command could not be spawned.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl PrecompileError {
    /// The process exit status corresponding to this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Load { .. } | Self::Minimizer { .. } | Self::Io(_) => 2,
            Self::Intermediate { .. } | Self::OutputOpen { .. } => 3,
            Self::OutputWrite { .. } | Self::OutputClose { .. } => 4,
            #[cfg(any(test, feature = "test-support"))]
            Self::StubMismatch { .. } => 2,
        }
    }
}

/// Result type alias using [`PrecompileError`].
pub type Result<T> = std::result::Result<T, PrecompileError>;
