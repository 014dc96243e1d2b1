use crate::core::calc::{calculate_per_person, calculate_tip};
use crate::domain::model::{BillInput, FormView, SplitCount, TipFraction};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Recompute tip and per-person total when the bill text changes.
    /// When off, totals only move on slider or split actions.
    pub recompute_on_bill_edit: bool,
    pub initial_tip: f64,
    pub initial_split: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            recompute_on_bill_edit: true,
            initial_tip: 0.0,
            initial_split: 1,
        }
    }
}

/// The bill form: three inputs and the two values derived from them.
///
/// Every setter recomputes exactly the derived fields it can affect, before
/// returning. Nothing is re-evaluated lazily.
#[derive(Debug, Clone)]
pub struct FormState {
    bill: BillInput,
    tip: TipFraction,
    split: SplitCount,
    tip_amount: f64,
    per_person_total: f64,
    recompute_on_bill_edit: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            bill: BillInput::default(),
            tip: TipFraction::default(),
            split: SplitCount::default(),
            tip_amount: 0.0,
            per_person_total: 0.0,
            recompute_on_bill_edit: true,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &FormSettings) -> Result<Self> {
        Ok(Self {
            tip: TipFraction::new(settings.initial_tip)?,
            split: SplitCount::new(settings.initial_split)?,
            recompute_on_bill_edit: settings.recompute_on_bill_edit,
            ..Self::default()
        })
    }

    /// Store new bill text. Text that is neither blank nor a non-negative
    /// decimal is rejected and the previous text kept.
    pub fn set_bill_input(&mut self, text: &str) -> Result<()> {
        // Rejected text returns before anything is stored.
        self.bill = BillInput::parse(text)?;

        // Legacy mode leaves the totals stale until the next slider or split action.
        if self.recompute_on_bill_edit {
            self.recompute_tip();
            self.recompute_per_person();
        }
        Ok(())
    }

    /// Keyboard "done": keep the trimmed text if the input is valid.
    pub fn submit_bill(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        // Same value, so the totals stay as they are.
        self.bill = self.bill.trimmed();
        true
    }

    pub fn set_tip_fraction(&mut self, fraction: TipFraction) {
        self.tip = fraction;
        tracing::debug!(
            fraction = fraction.value(),
            percent = fraction.percent(),
            "tip slider moved"
        );

        // The tip depends on the percent; the per-person total depends on both.
        self.recompute_tip();
        self.recompute_per_person();
    }

    pub fn increment_split(&mut self) {
        // Stops at MAX_SPLIT instead of wrapping.
        self.split = self.split.incremented();
        tracing::debug!(split = self.split.get(), "split increased");
        // Split does not affect the tip, only the share.
        self.recompute_per_person();
    }

    pub fn decrement_split(&mut self) {
        // Never below MIN_SPLIT.
        self.split = self.split.decremented();
        tracing::debug!(split = self.split.get(), "split decreased");
        self.recompute_per_person();
    }

    fn recompute_tip(&mut self) {
        self.tip_amount = calculate_tip(self.bill.amount(), self.tip_percent());
    }

    fn recompute_per_person(&mut self) {
        self.per_person_total =
            calculate_per_person(self.bill.amount(), self.split.get(), self.tip_percent());
    }

    pub fn bill_text(&self) -> &str {
        self.bill.as_str()
    }

    pub fn is_valid(&self) -> bool {
        self.bill.is_valid()
    }

    pub fn tip_fraction(&self) -> TipFraction {
        self.tip
    }

    pub fn tip_percent(&self) -> u32 {
        self.tip.percent()
    }

    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    pub fn split_count(&self) -> u32 {
        self.split.get()
    }

    pub fn per_person_total(&self) -> f64 {
        self.per_person_total
    }

    pub fn view(&self) -> FormView {
        FormView {
            bill_text: self.bill.as_str().to_string(),
            is_valid: self.is_valid(),
            tip_percent: self.tip_percent(),
            tip_amount: self.tip_amount,
            split_count: self.split.get(),
            per_person_total: self.per_person_total,
        }
    }
}
