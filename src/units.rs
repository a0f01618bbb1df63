//! Engineering-notation numbers for component values.
//!
//! Values may carry a single SI prefix as suffix, so `4.7u`, `10k` and
//! `100n` read as 4.7e-6, 1e4 and 1e-7. Plain and scientific notation
//! (`2.2`, `1e-9`) pass through unchanged.

use crate::error::SimError;

/// Parse a number with an optional SI prefix suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'f' => 1e-15,
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => return text.parse::<f64>().ok(),
    };

    text[..text.len() - last.len_utf8()]
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
}

/// [`parse_value`] with an error suitable for argument parsers.
pub fn parse_quantity(text: &str) -> Result<f64, SimError> {
    parse_value(text).ok_or_else(|| SimError::ConfigError {
        message: format!("'{text}' is not a number (SI suffixes f, p, n, u, m, k, M, G allowed)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value() {
        assert_relative_eq!(parse_value("10k").unwrap(), 10_000.0);
        assert_relative_eq!(parse_value("100n").unwrap(), 100e-9);
        assert_relative_eq!(parse_value("4.7u").unwrap(), 4.7e-6);
        assert_relative_eq!(parse_value("1µ").unwrap(), 1e-6);
        assert_relative_eq!(parse_value("1m").unwrap(), 1e-3);
        assert_relative_eq!(parse_value("1M").unwrap(), 1e6);
        assert_relative_eq!(parse_value(" 2.2 ").unwrap(), 2.2);
        assert_relative_eq!(parse_value("1e-9").unwrap(), 1e-9);
        assert_relative_eq!(parse_value("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_value_invalid() {
        assert!(parse_value("").is_none());
        assert!(parse_value("k").is_none());
        assert!(parse_value("ten").is_none());
        assert!(parse_quantity("1x").is_err());
    }
}
