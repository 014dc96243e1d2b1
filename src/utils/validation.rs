use crate::utils::error::{TipError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").expect("decimal pattern is a valid regex")
    })
}

/// True when `text`, once trimmed, is empty or a non-negative decimal.
pub fn is_bill_text(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || decimal_pattern().is_match(trimmed)
}

pub fn validate_bill_text(text: &str) -> Result<()> {
    if is_bill_text(text) {
        Ok(())
    } else {
        Err(TipError::InvalidBillInput {
            value: text.to_string(),
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TipError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so check containment rather than exclusion.
    if !(value >= min && value <= max) {
        return Err(TipError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bill_text() {
        assert!(is_bill_text(""));
        assert!(is_bill_text("   "));
        assert!(is_bill_text("42"));
        assert!(is_bill_text(" 42.50 "));
        assert!(is_bill_text("42."));
        assert!(is_bill_text(".5"));
        assert!(!is_bill_text("-3"));
        assert!(!is_bill_text("abc"));
        assert!(!is_bill_text("1.2.3"));
        assert!(!is_bill_text("1e3"));
        assert!(!is_bill_text("."));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("behavior.initial_split", 1u32, 1, 20).is_ok());
        assert!(validate_range("behavior.initial_split", 20u32, 1, 20).is_ok());
        assert!(validate_range("behavior.initial_split", 21u32, 1, 20).is_err());
        assert!(validate_range("behavior.initial_tip_fraction", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.currency_symbol", "$").is_ok());
        assert!(validate_non_empty_string("display.currency_symbol", "  ").is_err());
    }
}
