//! SQL Parser
//!
//! A hand-written recursive descent parser with one precedence level per
//! grammar rule and statement-level panic-mode recovery.

mod operators;
mod parser;

pub use parser::{parse, Parser, MAX_EXPRESSION_DEPTH};
