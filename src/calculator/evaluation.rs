//! Two-operand expression evaluation.
//!
//! Evaluates strings of the form `"a <op> b"`. The split happens at the first
//! operator character, so `"3--2"` reads as `3 - (-2)` and a leading sign on
//! the left operand (`"-3+2"`) leaves an empty left side.

use tracing::{debug, trace};

use super::detection::{LiteralGrammar, looks_like_expression};
use super::operator::Operator;
use crate::error::CalcError;

/// Evaluate a two-operand expression using the strict literal grammar.
pub fn eval_expr(input: &str) -> Result<f64, CalcError> {
    eval_expr_with(input, LiteralGrammar::default())
}

/// Evaluate a two-operand expression using the given literal grammar.
pub fn eval_expr_with(input: &str, grammar: LiteralGrammar) -> Result<f64, CalcError> {
    if !looks_like_expression(input, grammar) {
        debug!(input, ?grammar, "Input is not an expression");
        return Err(CalcError::InvalidExpression(input.to_string()));
    }

    let Some((index, symbol)) = input.char_indices().find(|(_, c)| Operator::is_symbol(*c))
    else {
        return Err(CalcError::InvalidExpression(input.to_string()));
    };
    let operator = Operator::try_from(symbol)?;

    let left = parse_operand(&input[..index])?;
    let right = parse_operand(&input[index + symbol.len_utf8()..])?;

    trace!(left, %operator, right, "eval");
    operator.apply(left, right)
}

fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| {
        debug!(operand = trimmed, "Malformed operand");
        CalcError::MalformedOperand(trimmed.to_string())
    })
}
