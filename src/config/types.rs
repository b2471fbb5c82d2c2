//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::calculator::LiteralGrammar;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Literal grammar used when evaluating expressions.
    pub grammar: LiteralGrammar,
    /// Maximum number of fractional digits when printing results.
    pub precision: usize,
    /// Group integer digits with `,` when printing results.
    pub thousands_separator: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grammar: LiteralGrammar::Strict,
            precision: 10,
            thousands_separator: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("precision = 4").unwrap();
        assert_eq!(config.precision, 4);
        assert_eq!(config.grammar, LiteralGrammar::Strict);
        assert!(config.thousands_separator);
    }

    #[test]
    fn test_grammar_lowercase() {
        let config: AppConfig = toml::from_str(r#"grammar = "extended""#).unwrap();
        assert_eq!(config.grammar, LiteralGrammar::Extended);
        assert!(toml::from_str::<AppConfig>(r#"grammar = "Extended""#).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: AppConfig = toml::from_str("theme = \"dark\"\nprecision = 2").unwrap();
        assert_eq!(config.precision, 2);
    }
}
