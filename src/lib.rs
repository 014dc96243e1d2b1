pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::events::{LineEventSource, ScriptEventSource};
pub use app::render::{JsonRenderer, TextRenderer};
pub use config::SessionSettings;
pub use crate::core::calc::{calculate_per_person, calculate_tip};
pub use crate::core::form::{FormSettings, FormState};
pub use crate::core::session::{SessionEngine, SessionSummary};
pub use domain::model::{FormEvent, FormView, MoneyFormat};
pub use utils::error::{Result, TipError};
