pub mod calc;
pub mod form;
pub mod session;

pub use crate::domain::model::{FormEvent, FormView};
pub use crate::domain::ports::{EventSource, Renderer};
pub use crate::utils::error::Result;
