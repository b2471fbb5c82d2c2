//! Result formatting for display.

use crate::config::{AppConfig, MAX_PRECISION};

/// Format a result for display.
///
/// Integral values print without a fraction; everything else prints with at
/// most `config.precision` fractional digits (capped at [`MAX_PRECISION`])
/// and no trailing zeros. Values that round to zero print as `0`.
pub fn format_result(value: f64, config: &AppConfig) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }

    let formatted = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let precision = config.precision.min(MAX_PRECISION);
        let fixed = format!("{:.*}", precision, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        match trimmed {
            "-0" => "0".to_string(),
            other => other.to_string(),
        }
    };

    if config.thousands_separator {
        group_thousands(&formatted)
    } else {
        formatted
    }
}

/// Insert `,` between every three digits of the integer part.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{}{}{}", sign, grouped, frac_part)
}
