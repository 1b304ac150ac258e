//! Token types for the SQL lexer.

use core::fmt;

use super::Position;

/// Reserved SQL keywords.
///
/// Keywords are recognized case-insensitively; keyword tokens always carry
/// the canonical upper-case spelling returned by [`Keyword::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    By,
    Delete,
    From,
    Having,
    Insert,
    Into,
    Is,
    Not,
    Null,
    Or,
    Order,
    Select,
    Use,
    Values,
    Where,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AND" => Some(Self::And),
            "BY" => Some(Self::By),
            "DELETE" => Some(Self::Delete),
            "FROM" => Some(Self::From),
            "HAVING" => Some(Self::Having),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "IS" => Some(Self::Is),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "SELECT" => Some(Self::Select),
            "USE" => Some(Self::Use),
            "VALUES" => Some(Self::Values),
            "WHERE" => Some(Self::Where),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::By => "BY",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Having => "HAVING",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Is => "IS",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Select => "SELECT",
            Self::Use => "USE",
            Self::Values => "VALUES",
            Self::Where => "WHERE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every legal operator lexeme.
pub const OPERATORS: [&str; 13] = [
    "=", "!=", "<", ">", "<=", ">=", "!<", "!>", "+", "-", "*", "/", "%",
];

/// Returns true if `c` occurs in at least one legal operator.
#[must_use]
pub(crate) const fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%')
}

/// Returns true if `s` is a legal operator.
#[must_use]
pub(crate) fn is_operator(s: &str) -> bool {
    OPERATORS.contains(&s)
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Reserved keyword (lexeme is upper-case)
    Keyword,
    /// Identifier (lexeme keeps its original casing)
    Identifier,
    /// Decimal integer literal that fits into an `i64`
    Number,
    /// Double-quoted string literal (lexeme excludes the quotes, escapes are kept raw)
    String,
    /// ,
    Comma,
    /// .
    Period,
    /// ;
    Semicolon,
    /// (
    LParen,
    /// )
    RParen,
    /// One of [`OPERATORS`]
    Operator,
    /// End of input sentinel
    EndOfInput,
}

impl TokenKind {
    /// Human readable description, used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string literal",
            Self::Comma => "`,`",
            Self::Period => "`.`",
            Self::Semicolon => "`;`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Operator => "operator",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its lexeme and start position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched text.
    pub lexeme: String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns true if this is the end-of-input sentinel.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        if self.is_keyword() {
            Keyword::from_str(&self.lexeme)
        } else {
            None
        }
    }

    /// Describes the token the way diagnostics quote it.
    #[must_use]
    pub fn quoted(&self) -> String {
        if self.is_eof() {
            String::from("end of input")
        } else {
            format!("`{}`", self.lexeme)
        }
    }
}
