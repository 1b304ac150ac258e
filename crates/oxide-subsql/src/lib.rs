//! # oxide-subsql
//!
//! A front end for a small SQL subset: `USE`, `SELECT`, `INSERT` and
//! `DELETE` statements with boolean, comparison and arithmetic expressions.
//!
//! This crate provides:
//! - A state-machine tokenizer that reports every lexical error in one pass
//! - A hand-written recursive descent parser with per-statement error
//!   recovery
//! - A typed AST with a compact textual rendering
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_subsql::{parse_source, Statement};
//!
//! let statements = parse_source("query.sql", "USE shop; SELECT name FROM users;").unwrap();
//! assert_eq!(statements.len(), 2);
//! assert!(matches!(statements[0], Statement::Use(_)));
//! ```
//!
//! ## Diagnostics
//!
//! Both phases are all-or-nothing: either every statement parses, or the
//! caller only gets the diagnostics.
//!
//! ```rust
//! use oxide_subsql::parse_source;
//!
//! let errors = parse_source("query.sql", "SELECT 1, 2").unwrap_err();
//! assert_eq!(
//!     errors[0].to_string(),
//!     "query.sql:[1,12] Expected `;`, but found end of input"
//! );
//! ```

pub mod ast;
pub mod diagnostic;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Statement, TableId};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::{tokenize, Keyword, Position, Token, TokenKind, Tokenizer};
pub use parser::{parse, Parser, MAX_EXPRESSION_DEPTH};

/// Tokenizes and parses `text` in one go.
///
/// `source_id` names the input in every [`Position`] (usually a file path).
/// Parsing only runs if tokenizing succeeded, so the errors are either all
/// lexical or all syntactic.
///
/// # Errors
///
/// Returns the lexical errors if tokenizing failed, otherwise the syntax
/// errors if parsing failed.
pub fn parse_source(source_id: &str, text: &str) -> Result<Vec<Statement>, Vec<Diagnostic>> {
    let tokens = tokenize(source_id, text)?;
    parse(&tokens)
}
