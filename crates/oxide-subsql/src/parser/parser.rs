//! SQL Parser implementation.

use core::fmt;

use super::operators::{additive_op, comparison_op, multiplicative_op, sign_op};
use crate::ast::{
    BinaryOp, DeleteStatement, Expr, InsertStatement, SelectStatement, Statement, TableId,
    UnaryOp, UseStatement,
};
use crate::diagnostic::Diagnostic;
use crate::lexer::{Keyword, Token, TokenKind};

/// Deepest expression nesting the parser accepts.
///
/// Every parenthesis, function call, prefix operator and chained binary
/// operator adds a level. Deeper input is rejected with a syntax error
/// instead of exhausting the stack.
pub const MAX_EXPRESSION_DEPTH: usize = 100;

/// A single parsing session over a token sequence.
///
/// The session owns nothing but a cursor into the borrowed tokens; create a
/// new one for every token sequence.
pub struct Parser<'t> {
    tokens: &'t [Token],
    /// Index of the current token. Never moves past the end-of-input token.
    current: usize,
    /// Expression nesting of the statement being parsed.
    depth: usize,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over the given tokens.
    ///
    /// # Panics
    ///
    /// Panics unless `tokens` contains exactly one
    /// [`TokenKind::EndOfInput`] token, in last place. Sequences produced by
    /// [`crate::lexer::tokenize`] always do.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        assert!(
            tokens.last().is_some_and(Token::is_eof)
                && tokens.iter().filter(|token| token.is_eof()).count() == 1,
            "token sequence must be terminated by a single end-of-input token"
        );
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses all statements until the end of input.
    ///
    /// A statement that fails to parse is skipped up to and including the
    /// next `;`, and parsing resumes with the following statement.
    ///
    /// # Errors
    ///
    /// Returns one diagnostic per failed statement, in input order, if any
    /// statement failed. Statements that did parse are discarded in that
    /// case.
    pub fn parse(mut self) -> Result<Vec<Statement>, Vec<Diagnostic>> {
        let span = tracing::debug_span!(
            target: "oxide_subsql::parser",
            "parse",
            tokens = self.tokens.len(),
        );
        let _guard = span.enter();

        let mut statements = vec![];
        let mut errors = vec![];

        while !self.peek().is_eof() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    tracing::trace!(
                        target: "oxide_subsql::parser",
                        line = error.position.line,
                        column = error.position.column,
                        message = %error.message,
                        "syntax error"
                    );
                    errors.push(error);
                    self.recover();
                }
            }
        }

        tracing::debug!(
            target: "oxide_subsql::parser",
            statements = statements.len(),
            errors = errors.len(),
            "parsed input"
        );

        if errors.is_empty() {
            Ok(statements)
        } else {
            Err(errors)
        }
    }

    /// Parses a single `;`-terminated statement.
    ///
    /// # Errors
    ///
    /// Returns a syntax error located at the first token that does not fit
    /// the grammar.
    pub fn parse_statement(&mut self) -> Result<Statement, Diagnostic> {
        self.depth = 0;
        let token = self.peek();
        match token.kind {
            TokenKind::Keyword => match token.as_keyword() {
                Some(Keyword::Use) => Ok(Statement::Use(self.parse_use_statement()?)),
                Some(Keyword::Select) => Ok(Statement::Select(self.parse_select_statement()?)),
                Some(Keyword::Insert) => Ok(Statement::Insert(self.parse_insert_statement()?)),
                Some(Keyword::Delete) => Ok(Statement::Delete(self.parse_delete_statement()?)),
                _ => Err(Diagnostic::syntax(
                    token.position.clone(),
                    format!(
                        "Unexpected keyword at start of a statement: {}",
                        token.quoted()
                    ),
                )),
            },
            _ => Err(self.unexpected("USE, SELECT, INSERT or DELETE at start of a statement")),
        }
    }

    /// Parses a USE statement.
    fn parse_use_statement(&mut self) -> Result<UseStatement, Diagnostic> {
        self.expect_keyword(Keyword::Use)?;
        let database_name = self.expect_identifier()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(UseStatement { database_name })
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, Diagnostic> {
        self.expect_keyword(Keyword::Select)?;

        let select_list = self.parse_expression_list()?;

        let from = if self.eat_keyword(Keyword::From) {
            Some(self.parse_table_id()?)
        } else {
            None
        };

        let where_condition = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon)?;

        Ok(SelectStatement {
            select_list,
            from,
            where_condition,
            order_by,
        })
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, Diagnostic> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let into_table = self.parse_table_id()?;

        self.expect(TokenKind::LParen)?;
        let columns = self.parse_identifier_list()?;
        self.expect(TokenKind::RParen)?;

        self.expect_keyword(Keyword::Values)?;
        let values = self.parse_tuple()?;

        self.expect(TokenKind::Semicolon)?;

        Ok(InsertStatement {
            into_table,
            columns,
            values,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, Diagnostic> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let from_table = self.parse_table_id()?;
        self.expect_keyword(Keyword::Where)?;
        let where_condition = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(DeleteStatement {
            from_table,
            where_condition,
        })
    }

    /// Parses `table` or `database.table`.
    fn parse_table_id(&mut self) -> Result<TableId, Diagnostic> {
        let first = self.expect_identifier()?;
        if self.eat(TokenKind::Period) {
            let table = self.expect_identifier()?;
            Ok(TableId::with_database(first, table))
        } else {
            Ok(TableId::table(first))
        }
    }

    /// Parses `()` or `(expr, ...)`.
    fn parse_tuple(&mut self) -> Result<Vec<Expr>, Diagnostic> {
        self.expect(TokenKind::LParen)?;
        if self.eat(TokenKind::RParen) {
            return Ok(vec![]);
        }
        let items = self.parse_expression_list()?;
        self.expect(TokenKind::RParen)?;
        Ok(items)
    }

    /// Parses an expression: `disjunct (OR disjunct)*`.
    fn parse_expression(&mut self) -> Result<Expr, Diagnostic> {
        let depth = self.depth;
        self.descend()?;
        let mut lhs = self.parse_disjunct()?;
        while self.eat_keyword(Keyword::Or) {
            self.descend()?;
            let rhs = self.parse_disjunct()?;
            lhs = lhs.binary(BinaryOp::Or, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    /// `conjunct (AND conjunct)*`
    fn parse_disjunct(&mut self) -> Result<Expr, Diagnostic> {
        let depth = self.depth;
        let mut lhs = self.parse_conjunct()?;
        while self.eat_keyword(Keyword::And) {
            self.descend()?;
            let rhs = self.parse_conjunct()?;
            lhs = lhs.binary(BinaryOp::And, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    /// `NOT conjunct | isnull`
    fn parse_conjunct(&mut self) -> Result<Expr, Diagnostic> {
        if self.eat_keyword(Keyword::Not) {
            let operand = self.nested(Self::parse_conjunct)?;
            Ok(Expr::unary(UnaryOp::Not, operand))
        } else {
            self.parse_is_null_check()
        }
    }

    /// `comparison (IS [NOT] NULL)?`
    fn parse_is_null_check(&mut self) -> Result<Expr, Diagnostic> {
        let operand = self.parse_comparison()?;
        if !self.eat_keyword(Keyword::Is) {
            return Ok(operand);
        }
        let negated = self.eat_keyword(Keyword::Not);
        self.expect_keyword(Keyword::Null)?;
        Ok(Expr::IsNullCheck {
            operand: Box::new(operand),
            negated,
        })
    }

    /// `comparable (cmp_op comparable)*`
    fn parse_comparison(&mut self) -> Result<Expr, Diagnostic> {
        let depth = self.depth;
        let mut lhs = self.parse_comparable()?;
        while let Some(op) = self.eat_operator(comparison_op) {
            self.descend()?;
            let rhs = self.parse_comparable()?;
            lhs = lhs.binary(op, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    /// `term (('+' | '-') term)*`
    fn parse_comparable(&mut self) -> Result<Expr, Diagnostic> {
        let depth = self.depth;
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.eat_operator(additive_op) {
            self.descend()?;
            let rhs = self.parse_term()?;
            lhs = lhs.binary(op, rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    /// `factor (('*' | '/' | '%') term)?`
    ///
    /// The right operand is a whole `term`, so `a / b * c` groups as
    /// `a / (b * c)`. Unlike the other binary levels this one associates to
    /// the right.
    fn parse_term(&mut self) -> Result<Expr, Diagnostic> {
        let lhs = self.parse_factor()?;
        match self.eat_operator(multiplicative_op) {
            Some(op) => {
                let rhs = self.nested(Self::parse_term)?;
                Ok(lhs.binary(op, rhs))
            }
            None => Ok(lhs),
        }
    }

    /// Parses identifiers, calls, parenthesized expressions, signed factors
    /// and constants.
    fn parse_factor(&mut self) -> Result<Expr, Diagnostic> {
        let token = self.peek();
        match token.kind {
            TokenKind::Identifier => self.parse_identifier_or_call(),
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Operator => match sign_op(&token.lexeme) {
                Some(op) => {
                    self.advance();
                    let operand = self.nested(Self::parse_factor)?;
                    Ok(Expr::unary(op, operand))
                }
                None => Err(Diagnostic::syntax(
                    token.position.clone(),
                    format!("Invalid operator at start of a factor: {}", token.quoted()),
                )),
            },
            TokenKind::Number => {
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    Diagnostic::syntax(
                        token.position.clone(),
                        format!("Number too long: {}", token.quoted()),
                    )
                })?;
                self.advance();
                Ok(Expr::number(value))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::string(token.lexeme.as_str()))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses a column reference, or a function call if the identifier is
    /// immediately followed by `(`.
    fn parse_identifier_or_call(&mut self) -> Result<Expr, Diagnostic> {
        let name = self.expect_identifier()?;
        if self.check(TokenKind::LParen) {
            let args = self.parse_tuple()?;
            Ok(Expr::function(name, args))
        } else {
            Ok(Expr::identifier(name))
        }
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, Diagnostic> {
        let mut exprs = vec![self.parse_expression()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, Diagnostic> {
        let mut idents = vec![self.expect_identifier()?];
        while self.eat(TokenKind::Comma) {
            idents.push(self.expect_identifier()?);
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// Enters one more level of expression nesting.
    fn descend(&mut self) -> Result<(), Diagnostic> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            let token = self.peek();
            return Err(Diagnostic::syntax(
                token.position.clone(),
                format!(
                    "Expression nested too deeply at {}, the maximum depth is {MAX_EXPRESSION_DEPTH}",
                    token.quoted()
                ),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Diagnostic>,
    ) -> Result<T, Diagnostic> {
        let depth = self.depth;
        self.descend()?;
        let result = parse(self);
        self.depth = depth;
        result
    }

    /// Discards tokens up to and including the next `;`, or up to the end
    /// of input.
    fn recover(&mut self) {
        let start = self.current;
        while !self.peek().is_eof() {
            if self.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
        tracing::trace!(
            target: "oxide_subsql::parser",
            skipped = self.current - start,
            "resynchronized after syntax error"
        );
    }

    /// Returns the current token.
    fn peek(&self) -> &'t Token {
        &self.tokens[self.current]
    }

    /// Returns the current token and moves past it, unless it is the
    /// end-of-input token.
    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    /// Checks if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is an operator accepted by `classify`.
    fn eat_operator<T>(&mut self, classify: impl Fn(&str) -> Option<T>) -> Option<T> {
        let token = self.peek();
        if token.kind != TokenKind::Operator {
            return None;
        }
        let op = classify(&token.lexeme)?;
        self.advance();
        Some(op)
    }

    /// Builds an error at the current token.
    fn unexpected(&self, expected: impl fmt::Display) -> Diagnostic {
        let token = self.peek();
        Diagnostic::syntax(
            token.position.clone(),
            format!("Expected {expected}, but found {}", token.quoted()),
        )
    }

    /// Expects the current token to be of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), Diagnostic> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(format_args!("keyword `{keyword}`")))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, Diagnostic> {
        self.expect(TokenKind::Identifier)
            .map(|token| token.lexeme.clone())
    }
}

/// Parses a token sequence into statements.
///
/// # Errors
///
/// Returns every syntax error if at least one statement failed to parse.
///
/// # Panics
///
/// Panics if `tokens` is not terminated by an end-of-input token.
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>, Vec<Diagnostic>> {
    Parser::new(tokens).parse()
}
