use crate::core::form::FormState;
use crate::domain::model::{FormEvent, FormView, TipFraction};
use crate::domain::ports::{EventSource, Renderer};
use crate::utils::error::Result;
use serde::Serialize;

/// What an event did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Slider or split action while the detail sub-form is hidden.
    Ignored,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub events_applied: usize,
    pub events_ignored: usize,
    pub events_rejected: usize,
    pub final_view: FormView,
}

/// Drives one form session: reads events one at a time, applies each to the
/// form, re-renders.
pub struct SessionEngine<S: EventSource, R: Renderer> {
    source: S,
    renderer: R,
    form: FormState,
}

impl<S: EventSource, R: Renderer> SessionEngine<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self::with_form(source, renderer, FormState::new())
    }

    pub fn with_form(source: S, renderer: R, form: FormState) -> Self {
        Self {
            source,
            renderer,
            form,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub async fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!("Starting bill form session");

        let mut applied = 0;
        let mut ignored = 0;
        let mut rejected = 0;

        // Show the empty form before the first event
        self.renderer.render(&self.form.view())?;

        loop {
            // One event at a time; end of input counts as quit
            let step = match self.source.next_event().await {
                Ok(Some(event)) => self.apply(event),
                Ok(None) => {
                    tracing::debug!("Event source exhausted");
                    Ok(Outcome::Stop)
                }
                Err(e) => Err(e),
            };

            match step {
                // Re-render after every state change
                Ok(Outcome::Applied) => {
                    applied += 1;
                    self.renderer.render(&self.form.view())?;
                }
                // Controls are hidden while the bill is empty
                Ok(Outcome::Ignored) => {
                    ignored += 1;
                    self.renderer.notice("Enter a bill total first")?;
                }
                Ok(Outcome::Stop) => break,
                // Bad input: report it and keep the session alive
                Err(e) if e.is_recoverable() => {
                    rejected += 1;
                    tracing::warn!("Rejected input: {}", e);
                    self.renderer.notice(&e.user_friendly_message())?;
                }
                // I/O and output failures end the session
                Err(e) => {
                    tracing::error!(
                        "Session aborted: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                    return Err(e);
                }
            }
        }

        tracing::info!(applied, ignored, rejected, "Session finished");

        Ok(SessionSummary {
            events_applied: applied,
            events_ignored: ignored,
            events_rejected: rejected,
            final_view: self.form.view(),
        })
    }

    /// Dispatch a single event to the form.
    pub fn apply(&mut self, event: FormEvent) -> Result<Outcome> {
        tracing::debug!(?event, "Applying event");
        match event {
            FormEvent::BillTextChanged(text) => {
                self.form.set_bill_input(&text)?;
            }
            FormEvent::SubmitBill => {
                self.form.submit_bill();
            }
            FormEvent::Show => {}
            FormEvent::Quit => return Ok(Outcome::Stop),
            FormEvent::SliderMoved(_) | FormEvent::SplitIncrement | FormEvent::SplitDecrement
                if !self.form.is_valid() =>
            {
                tracing::warn!("Ignoring {:?} while the bill is empty", event);
                return Ok(Outcome::Ignored);
            }
            // Out-of-range positions are rejected, never clamped
            FormEvent::SliderMoved(value) => {
                self.form.set_tip_fraction(TipFraction::new(value)?);
            }
            FormEvent::SplitIncrement => self.form.increment_split(),
            FormEvent::SplitDecrement => self.form.decrement_split(),
        }
        Ok(Outcome::Applied)
    }
}
