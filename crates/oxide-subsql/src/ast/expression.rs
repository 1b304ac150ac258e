//! Expression AST types.

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    NotLt,
    NotGt,

    // Additive
    Add,
    Sub,

    // Multiplicative
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotLt => "!<",
            Self::NotGt => "!>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// Logical NOT
    Not,
    /// Unary plus (+)
    Plus,
    /// Negation (-)
    Minus,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A column reference.
    Identifier(String),

    /// An integer constant.
    NumConstant(i64),

    /// A string constant, with escape sequences kept as written.
    StringConstant(String),

    /// A function call, `name(args...)`.
    FunctionApplication {
        /// The function name.
        name: String,
        /// The arguments (possibly empty).
        args: Vec<Expr>,
    },

    /// A binary expression.
    BinOp {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    UnOp {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// IS NULL / IS NOT NULL check.
    IsNullCheck {
        /// The expression to check.
        operand: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a new integer constant.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::NumConstant(value)
    }

    /// Creates a new string constant.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringConstant(value.into())
    }

    /// Creates a function application.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::FunctionApplication {
            name: name.into(),
            args,
        }
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::BinOp {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::UnOp {
            op,
            operand: Box::new(operand),
        }
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNullCheck {
            operand: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNullCheck {
            operand: Box::new(self),
            negated: true,
        }
    }
}
