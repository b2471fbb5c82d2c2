//! Variadic reducers and square root.
//!
//! Every reducer folds strictly left to right: `((a • b) • c) • ...`.
//! Operands are never reordered, which matters for subtraction and division.

use tracing::{debug, trace};

use super::operator::Operator;
use crate::error::CalcError;

/// Add all operands together.
///
/// Never fails; overflow saturates to infinity as IEEE-754 dictates.
/// A single operand is returned unchanged and an empty slice sums to `0.0`.
pub fn add(operands: &[f64]) -> f64 {
    trace!(count = operands.len(), "add");
    operands
        .iter()
        .copied()
        .reduce(|acc, x| acc + x)
        .unwrap_or(0.0)
}

/// Subtract every following operand from the first.
pub fn subtract(operands: &[f64]) -> Result<f64, CalcError> {
    reduce(Operator::Subtract, operands)
}

/// Multiply all operands together.
pub fn multiply(operands: &[f64]) -> Result<f64, CalcError> {
    reduce(Operator::Multiply, operands)
}

/// Divide the first operand by each following operand in turn.
///
/// Fails with [`CalcError::DivisionByZero`] as soon as the fold reaches a
/// zero divisor. A zero in first position is a valid dividend.
pub fn divide(operands: &[f64]) -> Result<f64, CalcError> {
    reduce(Operator::Divide, operands)
}

/// Square root of a non-negative number.
pub fn sqrt(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 {
        debug!(x, "Refusing square root of negative number");
        return Err(CalcError::NegativeRadicand(x));
    }
    Ok(x.sqrt())
}

fn reduce(op: Operator, operands: &[f64]) -> Result<f64, CalcError> {
    let [first, rest @ ..] = operands else {
        return Err(insufficient(op, 0));
    };
    if rest.is_empty() {
        return Err(insufficient(op, 1));
    }

    trace!(operation = op.name(), count = operands.len(), "reduce");
    rest.iter()
        .enumerate()
        .try_fold(*first, |acc, (i, &x)| {
            op.apply(acc, x).inspect_err(|e| {
                debug!(operation = op.name(), position = i + 1, "{}", e);
            })
        })
}

fn insufficient(op: Operator, supplied: usize) -> CalcError {
    debug!(operation = op.name(), supplied, "Not enough operands");
    CalcError::InsufficientOperands {
        operation: op.name(),
        supplied,
    }
}
