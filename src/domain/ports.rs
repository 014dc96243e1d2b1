use crate::domain::model::{FormEvent, FormView};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where user actions come from.
///
/// `Ok(None)` means the input is exhausted. An `Err` consumes the offending
/// input, so the caller may keep polling after a recoverable error.
#[async_trait]
pub trait EventSource: Send {
    async fn next_event(&mut self) -> Result<Option<FormEvent>>;
}

pub trait Renderer {
    fn render(&mut self, view: &FormView) -> Result<()>;
    fn notice(&mut self, message: &str) -> Result<()>;
}
