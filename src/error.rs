//! Error types shared by the library and the binary

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Per-file decode failures are not errors: they are logged
/// and the file is skipped.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("I/O error accessing {path}: {source}")]
    #[diagnostic(code(codefinder::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory tree under {root}: {source}")]
    #[diagnostic(code(codefinder::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Root directory not found: {path}")]
    #[diagnostic(
        code(codefinder::root_not_found),
        help("pass an existing directory with --source-root / --target-root")
    )]
    RootNotFound { path: PathBuf },

    #[error("Root is not a directory: {path}")]
    #[diagnostic(code(codefinder::not_a_directory))]
    NotADirectory { path: PathBuf },

    #[error("Invalid configuration in {path}: {message}")]
    #[diagnostic(code(codefinder::config))]
    Config { path: PathBuf, message: String },

    #[error("Failed to write report to {path}: {source}")]
    #[diagnostic(code(codefinder::report))]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(codefinder::json))]
    Json(#[from] serde_json::Error),

    #[error("Search cancelled")]
    #[diagnostic(code(codefinder::cancelled))]
    Cancelled,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
