//! Calculator core.
//!
//! This module provides:
//! - Variadic reducers (`add`, `subtract`, `multiply`, `divide`) and `sqrt`
//! - Detection of two-operand expression strings
//! - Evaluation of those expressions

mod arithmetic;
mod detection;
mod evaluation;
mod operator;
mod proptests;

pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use detection::{LiteralGrammar, looks_like_expression};
pub use evaluation::{eval_expr, eval_expr_with};
pub use operator::Operator;
