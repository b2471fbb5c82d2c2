pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;

pub use calculator::{
    LiteralGrammar, Operator, add, divide, eval_expr, eval_expr_with, looks_like_expression,
    multiply, sqrt, subtract,
};
pub use error::{CalcError, ConfigError};

#[cfg(test)]
pub mod test_utils;
