//! # Error Types
//!
//! Structured errors for document loading, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! A [`LoadError`] is printed at the point of detection and never crosses a
//! checking function as a panic; callers turn it into their pass/fail tally.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading a JSON document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read file: {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not syntactically valid JSON.
    ///
    /// The parser error carries the line and column of the first offending
    /// byte, so the displayed message is actionable without a re-run.
    #[error("invalid JSON: {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with location information.
        #[source]
        source: serde_json::Error,
    },
}
