//! SQL statement AST types.

use super::expression::Expr;

/// A table reference, optionally qualified with a database name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableId {
    /// Database name (optional).
    pub database: Option<String>,
    /// Table name.
    pub table: String,
}

impl TableId {
    /// Creates an unqualified table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            database: None,
            table: name.into(),
        }
    }

    /// Creates a table reference qualified with a database name.
    #[must_use]
    pub fn with_database(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            table: name.into(),
        }
    }
}

/// A USE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UseStatement {
    /// The database to switch to.
    pub database_name: String,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    /// The selected expressions (never empty).
    pub select_list: Vec<Expr>,
    /// The FROM clause.
    pub from: Option<TableId>,
    /// The WHERE clause.
    pub where_condition: Option<Expr>,
    /// The ORDER BY expression.
    pub order_by: Option<Expr>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertStatement {
    /// Target table.
    pub into_table: TableId,
    /// Column names (never empty).
    pub columns: Vec<String>,
    /// Values to insert; empty for `VALUES ()`.
    pub values: Vec<Expr>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteStatement {
    /// Table to delete from.
    pub from_table: TableId,
    /// WHERE clause (mandatory).
    pub where_condition: Expr,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// USE statement.
    Use(UseStatement),
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

impl Statement {
    /// Returns the leading keyword of the statement.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Use(_) => "USE",
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Delete(_) => "DELETE",
        }
    }
}
