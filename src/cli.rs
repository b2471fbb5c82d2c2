use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::calculator::{self, LiteralGrammar};
use crate::config::AppConfig;
use crate::error::CalcError;
use crate::format::format_result;

#[derive(Parser)]
#[command(name = "calckit")]
#[command(about = "Variadic arithmetic and two-operand expression evaluation")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "calckit=warn",
            1 => "calckit=info",
            2 => "calckit=debug",
            _ => "calckit=trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two or more numbers
    Add {
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Subtract every following number from the first
    Subtract {
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Multiply two or more numbers
    Multiply {
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Divide the first number by each following number
    Divide {
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Square root of a non-negative number
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Evaluate an expression such as "3 / 2"
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Accept any number of decimal digits in literals
        #[arg(long)]
        extended: bool,
    },
}

impl Commands {
    /// Run the calculation this command describes.
    pub fn evaluate(&self, config: &AppConfig) -> Result<f64, CalcError> {
        match self {
            Commands::Add { operands } => Ok(calculator::add(operands)),
            Commands::Subtract { operands } => calculator::subtract(operands),
            Commands::Multiply { operands } => calculator::multiply(operands),
            Commands::Divide { operands } => calculator::divide(operands),
            Commands::Sqrt { x } => calculator::sqrt(*x),
            Commands::Eval {
                expression,
                extended,
            } => {
                let grammar = if *extended {
                    LiteralGrammar::Extended
                } else {
                    config.grammar
                };
                calculator::eval_expr_with(expression, grammar)
            }
        }
    }
}

/// Handle a command, returning the formatted result.
pub fn handle_command(cmd: &Commands, config: &AppConfig) -> Result<String> {
    let value = cmd.evaluate(config)?;
    Ok(format_result(value, config))
}
