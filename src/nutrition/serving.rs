//! Serving size parsing
//!
//! Serving sizes arrive as free text typed by the user. Parsing is lenient:
//! the longest leading number is used ("50g" is 50) and anything that does
//! not start with a number, or does not give a finite value ("NaN",
//! "Infinity", an overflowing "1e400"), is defaulted to zero.

use serde::Serialize;

/// Outcome of parsing a user-entered serving size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ServingSize {
    /// A number was read from the text
    Parsed(f64),
    /// No usable number; treated as a zero-size serving
    Defaulted,
}

impl ServingSize {
    pub fn parse(text: &str) -> Self {
        match leading_number(text) {
            Some(value) if value.is_finite() => ServingSize::Parsed(value),
            _ => ServingSize::Defaulted,
        }
    }

    /// Numeric amount, zero when defaulted
    pub fn amount(&self) -> f64 {
        match self {
            ServingSize::Parsed(value) => *value,
            ServingSize::Defaulted => 0.0,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, ServingSize::Defaulted)
    }
}

/// Parse the longest prefix of `text` (after leading whitespace) that forms a
/// decimal float: optional sign, digits with an optional fraction, optional
/// exponent.
fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        // "5." is a number, "." alone is not
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(ServingSize::parse("100"), ServingSize::Parsed(100.0));
        assert_eq!(ServingSize::parse("2.5"), ServingSize::Parsed(2.5));
        assert_eq!(ServingSize::parse(".5"), ServingSize::Parsed(0.5));
        assert_eq!(ServingSize::parse("5."), ServingSize::Parsed(5.0));
        assert_eq!(ServingSize::parse("-20"), ServingSize::Parsed(-20.0));
    }

    #[test]
    fn test_parse_leading_prefix() {
        assert_eq!(ServingSize::parse("50g"), ServingSize::Parsed(50.0));
        assert_eq!(ServingSize::parse("  1.5e2 ml"), ServingSize::Parsed(150.0));
        assert_eq!(ServingSize::parse("12e"), ServingSize::Parsed(12.0));
        assert_eq!(ServingSize::parse("3.2.1"), ServingSize::Parsed(3.2));
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(ServingSize::parse(""), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("abc"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("."), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("-"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("NaN"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("g50"), ServingSize::Defaulted);
    }

    #[test]
    fn test_parse_non_finite_defaults() {
        assert_eq!(ServingSize::parse("1e400"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("-1e400g"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("Infinity"), ServingSize::Defaulted);
        assert_eq!(ServingSize::parse("1e300"), ServingSize::Parsed(1e300));
    }

    #[test]
    fn test_amount() {
        assert_eq!(ServingSize::Parsed(42.0).amount(), 42.0);
        assert_eq!(ServingSize::Defaulted.amount(), 0.0);
        assert!(ServingSize::Defaulted.is_defaulted());
    }
}
