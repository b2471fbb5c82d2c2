//! Domain-specific error types for calckit.
//!
//! Arithmetic failures are plain values returned to the caller; configuration
//! failures are only surfaced when the caller asks for them explicitly.

use thiserror::Error;

/// Errors produced by the arithmetic core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A variadic operation received fewer than two operands.
    #[error("{operation} needs at least 2 operands, got {supplied}")]
    InsufficientOperands {
        operation: &'static str,
        supplied: usize,
    },

    /// A divisor (any operand after the first) was zero.
    #[error("can't divide by zero")]
    DivisionByZero,

    /// Square root of a negative number.
    #[error("can't take the square root of a negative number: {0}")]
    NegativeRadicand(f64),

    /// One side of an expression is not a number.
    #[error("malformed operand: '{0}'")]
    MalformedOperand(String),

    /// The operator character is not one of `+ - * /`.
    #[error("could not match the given operator: '{0}'")]
    UnknownOperator(char),

    /// The input does not have the `<number> <op> <number>` shape.
    #[error("invalid expression: '{0}'")]
    InvalidExpression(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}
