//! Source location tracking for tokens and diagnostics.

use core::fmt;
use std::sync::Arc;

/// A location in the source text.
///
/// Lines and columns are 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Identifier of the source (usually a file path). Only used in messages.
    pub source: Arc<str>,
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            source: source.into(),
            line,
            column,
        }
    }

}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[{},{}]", self.source, self.line, self.column)
    }
}
