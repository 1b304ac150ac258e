#![allow(dead_code)]

use oxide_subsql::ast::{DeleteStatement, InsertStatement, SelectStatement, Statement};
use oxide_subsql::{parse_source, tokenize, Diagnostic, Position, Token};

/// Marks the expected position of an error inside example inputs.
pub const ERROR_MARKER: &str = "!!!>>>";

pub fn parse_all(sql: &str) -> Vec<Statement> {
    parse_source("", sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nErrors: {e:?}"))
}

pub fn parse(sql: &str) -> Statement {
    let mut statements = parse_all(sql);
    assert_eq!(statements.len(), 1, "Expected one statement in: {sql}");
    statements.remove(0)
}

pub fn parse_errors(sql: &str) -> Vec<Diagnostic> {
    match parse_source("", sql) {
        Ok(statements) => panic!("Expected errors for: {sql}\nParsed: {statements:?}"),
        Err(errors) => errors,
    }
}

pub fn tokens(sql: &str) -> Vec<Token> {
    tokenize("", sql).unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nErrors: {e:?}"))
}

pub fn lex_errors(sql: &str) -> Vec<Diagnostic> {
    match tokenize("", sql) {
        Ok(tokens) => panic!("Expected lexical errors for: {sql}\nTokens: {tokens:?}"),
        Err(errors) => errors,
    }
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Removes every [`ERROR_MARKER`] from `marked` and returns the clean input
/// together with the positions the markers pointed at.
///
/// At most one marker per line is supported.
pub fn extract_markers(marked: &str) -> (String, Vec<Position>) {
    let mut positions = vec![];
    for (index, line) in marked.split('\n').enumerate() {
        if let Some(offset) = line.find(ERROR_MARKER) {
            let column = line[..offset].chars().count() + 1;
            positions.push(Position::new(
                "",
                u32::try_from(index + 1).unwrap(),
                u32::try_from(column).unwrap(),
            ));
        }
    }
    (marked.replace(ERROR_MARKER, ""), positions)
}

pub fn positions(errors: &[Diagnostic]) -> Vec<Position> {
    errors.iter().map(|e| e.position.clone()).collect()
}

pub const VALID_STATEMENTS: &[&str] = &[
    "USE database1;",
    "USE some_database;",
    "USE _the_database;",
    "SELECT id, name, address FROM users \n    WHERE is_customer IS NOT NULL ORDER BY created;",
    r#"INSERT INTO user_notes (id, user_id, note, created)    VALUES (1, 1, "Note 1", NOW());"#,
    "DELETE FROM database2.logs WHERE id < 1000;",
    "USE myDatabase;",
    "USE\ndatabase\n;",
    "SELECT 1,2;",
    "SELECT a FROM b.c ORDER BY c - a;",
    "SELECT stuff\nFROM table WHERE x > 10\n  ;",
    "SELECT a,\"yes\" , col FROM tbl\nWHERE a > 10 * 10 ORDER BY -a;",
    "SELECT x FROM y WHERE z IS NULL;",
    "SELECT x FROM y WHERE z IS NOT NULL AND NOT z < 10;",
    r#"INSERT INTO a.b(x,y,z)VALUES(1,-2,"print\"hello\"");"#,
    "DELETE FROM z WHERE a + b * c - d < a * a + b * b OR a > b;",
    "DELETE FROM x.y WHERE NOT NOT NOT 2 + + + + 2 > - - 5;",
    "INSERT INTO x.y (a, b) VALUES ((1), (2 + (2 + + 2)));",
    "DELETE FROM t WHERE x IS NULL;",
    "DELETE FROM t WHERE x IS NOT NULL;",
    "DELETE FROM t WHERE NOT x IS NULL;",
];

pub const STATEMENTS_WITH_SYNTAX_ERRORS: &[&str] = &[
    "USE !!!>>>)database1;",
    "SELECT id, name,\n(address !!!>>>FROM users \n    WHERE is_customer IS NOT NULL ORDER BY created;",
    "INSERT INTO\nuser_notes (id,\nuser_id, note, created)    VALUES (1, 1, \"Note 1\", NOW()!!!>>>;",
    "DELETE FROM database2.logs WHERE id + !!!>>><= 1000;",
    "USE myDatabase!!!>>>.somethingElse;",
    "USE\n!!!>>>345678 database\n;",
    "SELECT !!!>>>SELECT 1,2;",
    "SELECT a FROM\nb.c ORDER !!!>>>c - a;",
    "SELECT stuff FROM table !!!>>>WREHE x > 10;",
    "SELECT a,\"yes\" , col FROM tbl\nWHERE a > 10 * 10 !!!>>>BY -a;",
    "SELECT x FROM\ny WHERE\nz IS !!!>>>MAYBE NULL;",
    "SELECT x FROM y \n WHERE z IS NOT NULL\n AND !!!>>>OR NOT z < 10;",
    r#"INSERT INTO
 a.b
(x, y, z!!!>>>() VALUES(1, -2, "print\"hello\"");"#,
    "DELETE FROM z\nWHERE a + b * c - d < a(!!!>>>* a + b * b OR a > b;",
    "!!!>>>lets SELECT stuff;",
    "!!!>>>NULL SELECT nothing;",
];

pub const STATEMENTS_WITH_LEXICAL_ERRORS: &[&str] = &[
    "USE !!!>>>++database1;",
    "SELECT id, 1234!!!>>>name,\n(address FROM users \n    WHERE is_customer IS NOT NULL ORDER BY created;",
    "INSERT INTO\nuser_notes (id,\nuser_id, note, created)    VALUES (1, 1, \"Note 1\", NOW();!!!>>>?",
    "DELETE FROM database2.logs WHERE id + !!!>>><=> 1000;",
    "USE myDatabase!!!>>>|somethingElse;",
    "USE\n!!!>>>34567885729759495724959279582479 database\n;",
    "SELECT SELECT 1,2       !!!>>>@here;",
    "SELECT \" FROM!!!>>>\nb.c ORDER c - a;",
    "SELECT \" FROM b.c ORDER c - a; !!!>>>",
    r#"SELECT stuff FROM table "this is ok \!!!>>>a" x > 10;"#,
    "emptySpace          !!!>>>~hello",
    "DELETE !!!>>>! invalidOperators 9124",
    "dont end lines with invalid operators !!!>>>!!",
    "too large !!!>>>8573979793679347693874953753957394",
];
