//! Test utilities and mock factories.
//!
//! Only compiled in test builds.

use crate::calculator::LiteralGrammar;
use crate::config::AppConfig;

/// Compare two floats with a tolerance relative to their magnitude.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create a mock AppConfig that prints raw numbers.
pub fn mock_plain_config(precision: usize) -> AppConfig {
    AppConfig {
        precision,
        thousands_separator: false,
        ..AppConfig::default()
    }
}

/// Create a mock AppConfig with the given literal grammar.
pub fn mock_config_with_grammar(grammar: LiteralGrammar) -> AppConfig {
    AppConfig {
        grammar,
        ..AppConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1.0e12 + 1.0e-4, 1.0e12));
        assert!(!approx_eq(1.0, 1.001));
    }

    #[test]
    fn test_mock_config() {
        let config = mock_config();
        assert_eq!(config.grammar, LiteralGrammar::Strict);
        assert!(config.thousands_separator);
    }

    #[test]
    fn test_mock_plain_config() {
        let config = mock_plain_config(3);
        assert_eq!(config.precision, 3);
        assert!(!config.thousands_separator);
    }

    #[test]
    fn test_mock_config_with_grammar() {
        let config = mock_config_with_grammar(LiteralGrammar::Extended);
        assert_eq!(config.grammar, LiteralGrammar::Extended);
    }
}
