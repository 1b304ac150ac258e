//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that stop the CLI before any statement is reported.
///
/// Lexical and syntax errors in the input are not `CliError`s; they are
/// part of a regular [`crate::Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input path does not name a regular file.
    #[error("Input file does not exist: `{}`", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read as UTF-8 text.
    #[error("Error occurred while reading input file: {source}")]
    ReadInput {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// JSON serialization of the parsed statements failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound(_) => 3,
            Self::ReadInput { .. } => 4,
            Self::Json(_) => 1,
        }
    }
}
