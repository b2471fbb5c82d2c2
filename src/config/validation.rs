//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// The most fractional digits an `f64` can meaningfully show.
pub const MAX_PRECISION: usize = 17;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.precision > MAX_PRECISION {
        warnings.push(ValidationWarning {
            field: "precision".to_string(),
            message: format!(
                "Precision {} exceeds maximum ({}). Extra digits are noise.",
                config.precision, MAX_PRECISION
            ),
        });
    }

    warnings
}
