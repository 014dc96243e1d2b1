use crate::utils::error::{Result, TipError};
use crate::utils::validation::validate_bill_text;
use serde::{Deserialize, Serialize};

pub const MIN_SPLIT: u32 = 1;
pub const MAX_SPLIT: u32 = 20;

/// Raw bill text as typed. Always empty, whitespace, or a non-negative decimal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BillInput(String);

impl BillInput {
    pub fn parse(text: &str) -> Result<Self> {
        validate_bill_text(text)?;
        // Digit strings past f64 range parse to infinity.
        let trimmed = text.trim();
        if !trimmed.is_empty() && !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(TipError::InvalidBillInput {
                value: text.to_string(),
            });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty once trimmed. Gates the detail sub-form.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Numeric value of the bill; empty text counts as zero.
    pub fn amount(&self) -> f64 {
        self.0.trim().parse().unwrap_or(0.0)
    }

    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }
}

/// Slider position in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TipFraction(f64);

impl TipFraction {
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TipError::InvalidTipFraction { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole percentage, `round(fraction * 100)`.
    ///
    /// Snapped to tenths first so that halves like 0.145 round up instead of
    /// following the float error below them.
    pub fn percent(self) -> u32 {
        ((self.0 * 1000.0).round() / 10.0).round() as u32
    }
}

/// Number of people sharing the bill, always within `MIN_SPLIT..=MAX_SPLIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SplitCount(u32);

impl Default for SplitCount {
    fn default() -> Self {
        Self(MIN_SPLIT)
    }
}

impl SplitCount {
    pub fn new(count: u32) -> Result<Self> {
        if (MIN_SPLIT..=MAX_SPLIT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(TipError::InvalidConfigValueError {
                field: "split_count".to_string(),
                value: count.to_string(),
                reason: format!("Value must be between {} and {}", MIN_SPLIT, MAX_SPLIT),
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn incremented(self) -> Self {
        Self((self.0 + 1).min(MAX_SPLIT))
    }

    pub fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_SPLIT))
    }
}

/// Feedback from the display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    BillTextChanged(String),
    SliderMoved(f64),
    SplitIncrement,
    SplitDecrement,
    /// Keyboard "done" on the bill field.
    SubmitBill,
    Show,
    Quit,
}

/// Everything the display surface may read from the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub bill_text: String,
    pub is_valid: bool,
    pub tip_percent: u32,
    pub tip_amount: f64,
    pub split_count: u32,
    pub per_person_total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    pub currency_symbol: String,
    pub decimal_places: usize,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_places: 2,
        }
    }
}

impl MoneyFormat {
    pub fn format(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol, self.decimal_places, amount
        )
    }
}
