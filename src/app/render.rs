use crate::domain::model::{FormView, MoneyFormat};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::Write;

/// Human-readable form, one block per render.
pub struct TextRenderer<W: Write> {
    out: W,
    money: MoneyFormat,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, money: MoneyFormat) -> Self {
        Self { out, money }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &FormView) -> Result<()> {
        writeln!(self.out, "Total Per Person: {}", self.money.format(view.per_person_total))?;
        if view.is_valid {
            writeln!(self.out, "  Bill:  {}", view.bill_text.trim())?;
            writeln!(self.out, "  Split: {}", view.split_count)?;
            writeln!(self.out, "  Tip:   {}", self.money.format(view.tip_amount))?;
            writeln!(self.out, "  {}%", view.tip_percent)?;
        } else {
            writeln!(self.out, "  Bill:  (enter bill total)")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "! {}", message)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line: a `FormView`, or `{"notice": ...}`.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &FormView) -> Result<()> {
        serde_json::to_writer(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &serde_json::json!({ "notice": message }))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
