//! Command-line front end for the `oxide-subsql` parser.
//!
//! Reads one SQL file, parses it and either renders the resulting statement
//! forest or reports every diagnostic.
//!
//! # Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | all statements parsed and rendered       |
//! | 2    | invalid command line                     |
//! | 3    | input file does not exist                |
//! | 4    | input file could not be read             |
//! | 101  | the input has lexical or syntax errors   |

pub mod error;
pub mod render;

use std::path::Path;

use oxide_subsql::{parse_source, Diagnostic};
use tracing::{debug, info};

pub use error::CliError;
pub use render::{render, render_dot, render_json, render_text, OutputFormat};

/// Exit code reported when the input contains errors.
pub const EXIT_INPUT_ERRORS: u8 = 101;

/// The result of processing one input file.
#[derive(Debug)]
pub enum Outcome {
    /// The rendered statement forest.
    Rendered(String),
    /// Every diagnostic found in the input.
    Failed(Vec<Diagnostic>),
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Rendered(_) => 0,
            Self::Failed(_) => EXIT_INPUT_ERRORS,
        }
    }

    /// Returns the text printed to stdout for this outcome.
    #[must_use]
    pub fn report(&self) -> String {
        match self {
            Self::Rendered(output) => output.clone(),
            Self::Failed(errors) => {
                let mut lines: Vec<String> = errors.iter().map(Diagnostic::to_report_line).collect();
                lines.push(format!("There were {} errors", errors.len()));
                lines.join("\n")
            }
        }
    }
}

/// Reads the input file as UTF-8 text.
///
/// # Errors
///
/// Returns [`CliError::InputNotFound`] if `path` is not a regular file and
/// [`CliError::ReadInput`] if reading fails.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `text` and renders it in `format`.
///
/// `source_id` is used as the source of every diagnostic position.
///
/// # Errors
///
/// Returns an error only if rendering fails; problems in the input are
/// reported as [`Outcome::Failed`].
pub fn process(source_id: &str, text: &str, format: OutputFormat) -> Result<Outcome, CliError> {
    match parse_source(source_id, text) {
        Ok(statements) => {
            info!(statements = statements.len(), ?format, "parsed input");
            Ok(Outcome::Rendered(render(&statements, format)?))
        }
        Err(errors) => {
            debug!(errors = errors.len(), "input rejected");
            Ok(Outcome::Failed(errors))
        }
    }
}

/// Reads, parses and renders the file at `path`.
///
/// # Errors
///
/// See [`read_input`] and [`process`].
pub fn run(path: &Path, format: OutputFormat) -> Result<Outcome, CliError> {
    let text = read_input(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    process(&path.to_string_lossy(), &text, format)
}
