pub mod toml_config;

use crate::core::form::FormSettings;
use crate::domain::model::MoneyFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved settings for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub money: MoneyFormat,
    pub form: FormSettings,
    pub json_output: bool,
    pub log_level: Option<String>,
    pub json_logging: bool,
}

impl SessionSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            money: config.money_format(),
            form: config.form_settings(),
            json_output: false,
            log_level: config.log_level().map(str::to_string),
            json_logging: config.json_logging(),
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jettip")]
#[command(about = "Split a bill and tip between friends, one keystroke at a time")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit one JSON view per line instead of the text layout
    #[arg(long)]
    pub json: bool,

    /// Currency symbol, overrides the config file
    #[arg(long)]
    pub currency: Option<String>,

    /// Only recompute totals on slider and split actions, not on bill edits
    #[arg(long)]
    pub stale_bill_edits: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<SessionSettings> {
        let mut file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(currency) = &self.currency {
            file_config
                .display
                .get_or_insert_with(Default::default)
                .currency_symbol = Some(currency.clone());
        }
        if self.stale_bill_edits {
            file_config
                .behavior
                .get_or_insert_with(Default::default)
                .recompute_on_bill_edit = Some(false);
        }

        let mut settings = SessionSettings::from_toml(&file_config)?;
        settings.json_output = self.json;
        Ok(settings)
    }
}
