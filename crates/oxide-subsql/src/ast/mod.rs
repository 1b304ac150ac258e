//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Both [`Statement`] and [`Expr`] are closed enums: consumers match on them
//! exhaustively, so adding a variant forces every walker to be revisited.
//! Nodes are built bottom-up by the parser and never mutated afterwards.

mod display;
mod expression;
mod statement;

pub use expression::{BinaryOp, Expr, UnaryOp};
pub use statement::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, TableId, UseStatement,
};
