//! Plain-text rendering of AST nodes via `fmt::Display`.
//!
//! The output is a compact, unambiguous tree dump meant for people and
//! golden tests, not SQL text.

use std::fmt;

use super::{
    BinaryOp, DeleteStatement, Expr, InsertStatement, SelectStatement, Statement, TableId,
    UnaryOp, UseStatement,
};

fn bracket_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

fn optional<T: fmt::Display>(f: &mut fmt::Formatter<'_>, item: Option<&T>) -> fmt::Result {
    match item {
        Some(item) => write!(f, "{item}"),
        None => f.write_str("(omitted)"),
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "Id({name})"),
            Self::NumConstant(value) => write!(f, "Num({value})"),
            Self::StringConstant(value) => write!(f, "Str({value})"),
            Self::FunctionApplication { name, args } => {
                write!(f, "FunctionApplication(fun={name}, args=")?;
                bracket_list(f, args)?;
                f.write_str(")")
            }
            Self::BinOp { op, left, right } => write!(f, "BinOp({left},{op},{right})"),
            Self::UnOp { op, operand } => write!(f, "UnOp({op},{operand})"),
            Self::IsNullCheck { operand, negated } => {
                if *negated {
                    write!(f, "IsNotNull({operand})")
                } else {
                    write!(f, "IsNull({operand})")
                }
            }
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(database) => write!(f, "TableId({database}.{})", self.table),
            None => write!(f, "TableId({})", self.table),
        }
    }
}

impl fmt::Display for UseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use(databaseName={})", self.database_name)
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Select(\n  list=")?;
        bracket_list(f, &self.select_list)?;
        f.write_str("\n  from=")?;
        optional(f, self.from.as_ref())?;
        f.write_str("\n  where=")?;
        optional(f, self.where_condition.as_ref())?;
        f.write_str("\n  orderBy=")?;
        optional(f, self.order_by.as_ref())?;
        f.write_str("\n)")
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insert(\n  into={}\n  columns=", self.into_table)?;
        bracket_list(f, &self.columns)?;
        f.write_str("\n  values=")?;
        bracket_list(f, &self.values)?;
        f.write_str("\n)")
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Delete(\n  from={}\n  where={}\n)",
            self.from_table, self.where_condition
        )
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Use(s) => fmt::Display::fmt(s, f),
            Self::Select(s) => fmt::Display::fmt(s, f),
            Self::Insert(s) => fmt::Display::fmt(s, f),
            Self::Delete(s) => fmt::Display::fmt(s, f),
        }
    }
}
