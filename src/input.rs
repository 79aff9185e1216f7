use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a money string, tolerating "$", thousands separators and
/// accounting-style parentheses. Blank input is zero.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .with_context(|| format!("Failed to parse '{s}' as decimal"))
}

/// Form-field coercion: anything unparseable becomes zero.
pub(crate) fn coerce_amount(s: &str) -> Decimal {
    match parse_decimal(s) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("coercing non-numeric input to 0: {e}");
            Decimal::ZERO
        }
    }
}

/// Same as `coerce_amount`, but negatives also collapse to zero.
pub(crate) fn coerce_non_negative(s: &str) -> Decimal {
    coerce_amount(s).max(Decimal::ZERO)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
