//! Diagnostics reported by the tokenizer and the parser.

use crate::lexer::Position;

/// The phase that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// Raised while forming tokens from characters.
    Lexical,
    /// Raised while forming statements from tokens.
    Syntax,
}

/// A located, human readable problem in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{position} {message}")]
pub struct Diagnostic {
    /// Which phase found the problem.
    pub kind: DiagnosticKind,
    /// Where the problem is.
    pub position: Position,
    /// What is wrong.
    pub message: String,
}

impl Diagnostic {
    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(position: Position, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Lexical,
            position,
            message: message.into(),
        }
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(position: Position, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            position,
            message: message.into(),
        }
    }

    /// Formats the diagnostic the way build tools print errors, so editors
    /// can jump to the location.
    #[must_use]
    pub fn to_report_line(&self) -> String {
        format!("[ERROR] {self}")
    }
}
