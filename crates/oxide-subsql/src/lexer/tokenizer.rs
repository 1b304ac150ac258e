//! SQL Tokenizer implementation.
//!
//! The tokenizer is a small deterministic finite automaton. Characters are
//! fed one by one into the current [`State`]; a state either consumes the
//! character or finishes the current token and hands the character back to
//! [`State::Default`]. Lexical errors are recorded and scanning simply goes
//! on, so a single call reports every lexical error in the input.

use std::sync::Arc;

use super::token::{is_operator, is_operator_char};
use super::{Keyword, Position, Token, TokenKind};
use crate::diagnostic::Diagnostic;

/// States of the tokenizer automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    ScanIdentifier,
    ScanNumber,
    ScanString,
    ScanStringEscape,
    ScanOperator,
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

const fn is_escapable(c: char) -> bool {
    matches!(c, '"' | 'n' | 'r' | 'b' | 'f' | '\\')
}

/// A single tokenization session over one input.
///
/// A session is consumed by [`Tokenizer::tokenize`]; create a new one for
/// every input.
pub struct Tokenizer<'a> {
    /// Source identifier copied into every position.
    source: Arc<str>,
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Line of the current position.
    line: u32,
    /// Column of the current position.
    column: u32,
    /// The byte position of the start of the current token.
    token_start: usize,
    /// Column of the start of the current token.
    token_start_column: u32,
    state: State,
    tokens: Vec<Token>,
    errors: Vec<Diagnostic>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, input: &'a str) -> Self {
        Self {
            source: source.into(),
            input,
            pos: 0,
            line: 1,
            column: 1,
            token_start: 0,
            token_start_column: 1,
            state: State::Default,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Moves past the current character on the same line.
    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
        self.column = self.column.saturating_add(1);
    }

    /// Moves past a `\n`.
    fn advance_line(&mut self) {
        self.pos += 1;
        self.line = self.line.saturating_add(1);
        self.column = 1;
    }

    fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.token_start_column = self.column;
    }

    fn current_position(&self) -> Position {
        Position::new(Arc::clone(&self.source), self.line, self.column)
    }

    /// Tokens never span lines, so the current line is also the token line.
    fn token_start_position(&self) -> Position {
        Position::new(Arc::clone(&self.source), self.line, self.token_start_column)
    }

    fn lexeme(&self) -> &'a str {
        &self.input[self.token_start..self.pos]
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: &str) {
        let token = Token::new(kind, lexeme, self.token_start_position());
        self.tokens.push(token);
    }

    fn push_error(&mut self, error: Diagnostic) {
        tracing::trace!(
            target: "oxide_subsql::lexer",
            line = error.position.line,
            column = error.position.column,
            message = %error.message,
            "lexical error"
        );
        self.errors.push(error);
    }

    /// Records an error at the start of the current token.
    fn error_at_token(&mut self, message: impl Into<String>) {
        self.push_error(Diagnostic::lexical(self.token_start_position(), message));
    }

    /// Records an error at the current character.
    fn error_at_char(&mut self, message: impl Into<String>) {
        self.push_error(Diagnostic::lexical(self.current_position(), message));
    }

    /// Emits a keyword or identifier token for the scanned text.
    fn finish_identifier(&mut self) {
        let text = self.lexeme();
        match Keyword::from_str(text) {
            Some(keyword) => self.push_token(TokenKind::Keyword, keyword.as_str()),
            None => self.push_token(TokenKind::Identifier, text),
        }
    }

    /// Emits a number token, or an error if the digits do not fit into an `i64`.
    fn finish_number(&mut self) {
        let text = self.lexeme();
        if text.parse::<i64>().is_ok() {
            self.push_token(TokenKind::Number, text);
        } else {
            self.error_at_token(format!("Number too long: `{text}`"));
        }
    }

    /// Emits an operator token, or an error if the scanned run of operator
    /// characters is not a legal operator.
    fn finish_operator(&mut self) {
        let text = self.lexeme();
        if is_operator(text) {
            self.push_token(TokenKind::Operator, text);
        } else {
            self.error_at_token(format!("Invalid operator: `{text}`"));
        }
    }

    /// Emits a string token; the lexeme excludes the surrounding quotes.
    fn finish_string(&mut self) {
        let lexeme = self.lexeme();
        let text = &lexeme[1..lexeme.len() - 1];
        self.push_token(TokenKind::String, text);
    }

    /// Feeds one character into the automaton.
    fn step(&mut self, c: char) {
        match self.state {
            State::Default => {
                self.begin_token();
                if c == '\n' {
                    self.advance_line();
                } else if c.is_whitespace() {
                    self.advance(c);
                } else if is_identifier_start(c) {
                    self.advance(c);
                    self.state = State::ScanIdentifier;
                } else if c.is_ascii_digit() {
                    self.advance(c);
                    self.state = State::ScanNumber;
                } else if c == '"' {
                    self.advance(c);
                    self.state = State::ScanString;
                } else if is_operator_char(c) {
                    self.advance(c);
                    self.state = State::ScanOperator;
                } else {
                    let single = match c {
                        '(' => Some(TokenKind::LParen),
                        ')' => Some(TokenKind::RParen),
                        ',' => Some(TokenKind::Comma),
                        '.' => Some(TokenKind::Period),
                        ';' => Some(TokenKind::Semicolon),
                        _ => None,
                    };
                    self.advance(c);
                    match single {
                        Some(kind) => {
                            let text = self.lexeme();
                            self.push_token(kind, text);
                        }
                        None => self.error_at_token(format!("Invalid token: `{c}`")),
                    }
                }
            }
            State::ScanIdentifier => {
                if is_identifier_part(c) {
                    self.advance(c);
                } else {
                    self.finish_identifier();
                    self.state = State::Default;
                }
            }
            State::ScanNumber => {
                if c.is_ascii_digit() {
                    self.advance(c);
                } else if is_identifier_part(c) {
                    self.error_at_char("Number lumped together with identifier characters");
                    self.state = State::Default;
                } else {
                    self.finish_number();
                    self.state = State::Default;
                }
            }
            State::ScanString => match c {
                '"' => {
                    self.advance(c);
                    self.finish_string();
                    self.state = State::Default;
                }
                '\\' => {
                    self.advance(c);
                    self.state = State::ScanStringEscape;
                }
                '\r' | '\n' => {
                    self.error_at_char("Multiline strings not supported");
                    self.state = State::Default;
                }
                _ => self.advance(c),
            },
            State::ScanStringEscape => {
                if c == '\r' || c == '\n' {
                    self.error_at_char("Multiline strings not supported");
                    self.state = State::Default;
                } else {
                    if !is_escapable(c) {
                        self.error_at_char(format!("Invalid escape sequence: \\{c}"));
                    }
                    self.advance(c);
                    self.state = State::ScanString;
                }
            }
            State::ScanOperator => {
                if is_operator_char(c) {
                    self.advance(c);
                } else {
                    self.finish_operator();
                    self.state = State::Default;
                }
            }
        }
    }

    /// Finalizes whatever token is in progress when the input runs out.
    fn finish_input(&mut self) {
        match self.state {
            State::Default => {}
            State::ScanIdentifier => self.finish_identifier(),
            State::ScanNumber => self.finish_number(),
            State::ScanString | State::ScanStringEscape => {
                self.error_at_char("Unterminated string");
            }
            State::ScanOperator => self.finish_operator(),
        }
        self.state = State::Default;
    }

    /// Runs the automaton over the entire input.
    ///
    /// The token sequence always ends with exactly one
    /// [`TokenKind::EndOfInput`] token.
    ///
    /// # Errors
    ///
    /// Returns every lexical error found in the input, in scan order, if
    /// there was at least one. No tokens are returned in that case.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<Diagnostic>> {
        let span = tracing::debug_span!(
            target: "oxide_subsql::lexer",
            "tokenize",
            source = %self.source,
            bytes = self.input.len(),
        );
        let _guard = span.enter();

        while let Some(c) = self.peek() {
            self.step(c);
        }
        self.finish_input();

        self.begin_token();
        self.push_token(TokenKind::EndOfInput, "");

        tracing::debug!(
            target: "oxide_subsql::lexer",
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized input"
        );

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Converts `text` into tokens.
///
/// `source_id` is opaque and only copied into positions.
///
/// # Errors
///
/// Returns all lexical errors if the text contains at least one.
pub fn tokenize(source_id: &str, text: &str) -> Result<Vec<Token>, Vec<Diagnostic>> {
    Tokenizer::new(source_id, text).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize("", input).unwrap_or_else(|e| panic!("Failed to tokenize {input:?}: {e:?}"))
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokens(input).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(input: &str) -> Vec<String> {
        tokens(input).into_iter().map(|t| t.lexeme).collect()
    }

    fn errors(input: &str) -> Vec<Diagnostic> {
        tokenize("", input).expect_err(&format!("Expected lexical errors for {input:?}"))
    }

    fn error_places(input: &str) -> Vec<(u32, u32)> {
        errors(input)
            .into_iter()
            .map(|e| (e.position.line, e.position.column))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokens("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokens("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].position.line, tokens[0].position.column), (2, 4));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            lexemes("select FROM wHeRe"),
            vec!["SELECT", "FROM", "WHERE", ""]
        );
        assert_eq!(
            token_kinds("select FROM wHeRe"),
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_identifiers_keep_casing() {
        assert_eq!(
            lexemes("myDatabase bar_baz _qux $x Selected"),
            vec!["myDatabase", "bar_baz", "_qux", "$x", "Selected", ""]
        );
        assert!(tokens("myDatabase")[0].kind == TokenKind::Identifier);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 0 9223372036854775807"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(lexemes("42 007"), vec!["42", "007", ""]);
    }

    #[test]
    fn test_strings_keep_raw_escapes() {
        let tokens = tokens(r#""print\"hello\"" "a\nb""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r#"print\"hello\""#);
        assert_eq!(tokens[1].lexeme, r"a\nb");
        assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokens(r#""""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lexemes("= != < > <= >= !< !> + - * / %"),
            vec!["=", "!=", "<", ">", "<=", ">=", "!<", "!>", "+", "-", "*", "/", "%", ""]
        );
        assert_eq!(tokens("<=")[0].kind, TokenKind::Operator);
    }

    #[test]
    fn test_operators_are_greedy() {
        // "a<-b" is one operator run, and "<-" is not an operator.
        assert_eq!(error_places("a<-b"), vec![(1, 2)]);
        // Separated by spaces it is fine.
        assert_eq!(lexemes("a< -b"), vec!["a", "<", "-", "b", ""]);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) , . ;"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Period,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            token_kinds("SELECT id, name FROM users WHERE active = 1;"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokens("USE\n  db ;");
        let places: Vec<_> = tokens
            .iter()
            .map(|t| (t.position.line, t.position.column))
            .collect();
        assert_eq!(places, vec![(1, 1), (2, 3), (2, 6), (2, 7)]);
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokens("\"żółw\" x");
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].position.column, 8);
    }

    #[test]
    fn test_source_id_is_copied() {
        let tokens = tokenize("dir/q.sql", "USE db;").unwrap();
        assert!(tokens.iter().all(|t| &*t.position.source == "dir/q.sql"));
    }

    #[test]
    fn test_identifier_at_end_of_input() {
        assert_eq!(lexemes("abc"), vec!["abc", ""]);
        assert_eq!(lexemes("123"), vec!["123", ""]);
        assert_eq!(lexemes("<="), vec!["<=", ""]);
    }

    #[test]
    fn test_invalid_character() {
        let errs = errors("emptySpace          ~hello");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Invalid token: `~`");
        assert_eq!(errs[0].position.column, 21);
    }

    #[test]
    fn test_invalid_operator() {
        assert_eq!(error_places("USE ++database1;"), vec![(1, 5)]);
        assert_eq!(error_places("DELETE ! invalidOperators 9124"), vec![(1, 8)]);
        let errs = errors("x <=> 1");
        assert_eq!(errs[0].message, "Invalid operator: `<=>`");
    }

    #[test]
    fn test_invalid_operator_at_end_of_input() {
        assert_eq!(error_places("dont end lines with !!"), vec![(1, 21)]);
    }

    #[test]
    fn test_number_too_long() {
        let errs = errors("99999999999999999999");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Number too long: `99999999999999999999`");
        assert_eq!(error_places("USE\n34567885729759495724959279582479 x;"), vec![(2, 1)]);
        assert_eq!(error_places("SELECT 9223372036854775808;"), vec![(1, 8)]);
    }

    #[test]
    fn test_number_lumped_with_identifier() {
        let errs = errors("SELECT 1234name;");
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].message,
            "Number lumped together with identifier characters"
        );
        assert_eq!(errs[0].position.column, 12);
    }

    #[test]
    fn test_multiline_string() {
        assert_eq!(error_places("SELECT \" FROM\nb.c ORDER c - a;"), vec![(1, 14)]);
    }

    #[test]
    fn test_carriage_return_in_string() {
        let errs = errors("SELECT \"a\r\n;");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Multiline strings not supported");
        assert_eq!(errs[0].position.column, 10);

        // The partial literal is abandoned, so the closing quote opens a new one.
        let errs = errors("\"a\rb\"");
        let messages: Vec<_> = errs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Multiline strings not supported", "Unterminated string"]
        );
        assert_eq!(error_places("\"a\rb\""), vec![(1, 3), (1, 6)]);
    }

    #[test]
    fn test_line_break_after_backslash() {
        let errs = errors("\"a\\\nb;");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Multiline strings not supported");
        assert_eq!(error_places("\"a\\\nb;"), vec![(1, 4)]);
    }

    #[test]
    fn test_unterminated_string() {
        let errs = errors("SELECT \" FROM b.c; ");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Unterminated string");
        assert_eq!(errs[0].position.column, 20);
    }

    #[test]
    fn test_unterminated_string_after_backslash() {
        assert_eq!(errors("\"abc\\").len(), 1);
    }

    #[test]
    fn test_invalid_escape_does_not_abort_string() {
        let errs = errors(r#"SELECT "ok \a" x > 10;"#);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Invalid escape sequence: \\a");
        assert_eq!(errs[0].position.column, 13);
    }

    #[test]
    fn test_all_errors_collected() {
        let errs = errors("~ 12x \"a\\q\" <> 99999999999999999999 \"open");
        let messages: Vec<_> = errs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Invalid token: `~`",
                "Number lumped together with identifier characters",
                "Invalid escape sequence: \\q",
                "Invalid operator: `<>`",
                "Number too long: `99999999999999999999`",
                "Unterminated string",
            ]
        );
        assert!(errs.iter().all(|e| e.kind == crate::DiagnosticKind::Lexical));
    }
}
