//! Output formats for a parsed statement forest.

mod dot;

pub use dot::render_dot;

use oxide_subsql::Statement;

use crate::error::CliError;

/// How parsed statements are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact textual tree dump.
    #[default]
    Text,
    /// Graphviz DOT digraph.
    Dot,
    /// Pretty-printed JSON.
    Json,
}

/// Renders the statements one per block, separated by newlines.
#[must_use]
pub fn render_text(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the statements as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`CliError::Json`] if serialization fails.
pub fn render_json(statements: &[Statement]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(statements)?)
}

/// Renders the statements in the given format.
///
/// # Errors
///
/// Only the JSON format can fail.
pub fn render(statements: &[Statement], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(statements)),
        OutputFormat::Dot => Ok(render_dot(statements)),
        OutputFormat::Json => render_json(statements),
    }
}
