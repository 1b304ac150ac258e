//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written, state-machine driven tokenizer that
//! turns source text into a token sequence terminated by an end-of-input
//! sentinel, or into the complete list of lexical errors found in the text.

mod position;
mod token;
mod tokenizer;

pub use position::Position;
pub use token::{Keyword, Token, TokenKind, OPERATORS};
pub use tokenizer::{tokenize, Tokenizer};
