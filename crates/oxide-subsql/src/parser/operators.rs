//! Classification of operator tokens by precedence level.

use crate::ast::{BinaryOp, UnaryOp};

/// Maps a comparison operator lexeme to its operator.
#[must_use]
pub fn comparison_op(lexeme: &str) -> Option<BinaryOp> {
    match lexeme {
        "=" => Some(BinaryOp::Eq),
        "!=" => Some(BinaryOp::NotEq),
        "<" => Some(BinaryOp::Lt),
        ">" => Some(BinaryOp::Gt),
        "<=" => Some(BinaryOp::LtEq),
        ">=" => Some(BinaryOp::GtEq),
        "!<" => Some(BinaryOp::NotLt),
        "!>" => Some(BinaryOp::NotGt),
        _ => None,
    }
}

/// Maps `+` and `-` to their binary operators.
#[must_use]
pub fn additive_op(lexeme: &str) -> Option<BinaryOp> {
    match lexeme {
        "+" => Some(BinaryOp::Add),
        "-" => Some(BinaryOp::Sub),
        _ => None,
    }
}

/// Maps `*`, `/` and `%` to their binary operators.
#[must_use]
pub fn multiplicative_op(lexeme: &str) -> Option<BinaryOp> {
    match lexeme {
        "*" => Some(BinaryOp::Mul),
        "/" => Some(BinaryOp::Div),
        "%" => Some(BinaryOp::Mod),
        _ => None,
    }
}

/// Maps the sign operators that may prefix a factor.
#[must_use]
pub fn sign_op(lexeme: &str) -> Option<UnaryOp> {
    match lexeme {
        "+" => Some(UnaryOp::Plus),
        "-" => Some(UnaryOp::Minus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::OPERATORS;

    #[test]
    fn test_every_operator_has_exactly_one_binary_level() {
        for op in OPERATORS {
            let levels = [comparison_op(op), additive_op(op), multiplicative_op(op)]
                .iter()
                .filter(|level| level.is_some())
                .count();
            assert_eq!(levels, 1, "{op}");
        }
    }

    #[test]
    fn test_binary_op_symbols_match_lexemes() {
        for op in OPERATORS {
            let binary = comparison_op(op)
                .or_else(|| additive_op(op))
                .or_else(|| multiplicative_op(op));
            assert_eq!(binary.map(|b| b.as_str()), Some(op));
        }
    }

    #[test]
    fn test_sign_op() {
        assert_eq!(sign_op("+"), Some(UnaryOp::Plus));
        assert_eq!(sign_op("-"), Some(UnaryOp::Minus));
        assert_eq!(sign_op("*"), None);
    }
}
