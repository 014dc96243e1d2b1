use crate::core::form::FormSettings;
use crate::domain::model::{MoneyFormat, MAX_SPLIT, MIN_SPLIT};
use crate::utils::error::{Result, TipError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional session configuration file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub behavior: Option<BehaviorConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub decimal_places: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub recompute_on_bill_edit: Option<bool>,
    pub initial_tip_fraction: Option<f64>,
    pub initial_split: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load and parse a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TipError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TipError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TipError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn money_format(&self) -> MoneyFormat {
        let defaults = MoneyFormat::default();
        let display = self.display.clone().unwrap_or_default();
        MoneyFormat {
            currency_symbol: display.currency_symbol.unwrap_or(defaults.currency_symbol),
            decimal_places: display.decimal_places.unwrap_or(defaults.decimal_places),
        }
    }

    pub fn form_settings(&self) -> FormSettings {
        let defaults = FormSettings::default();
        let behavior = self.behavior.clone().unwrap_or_default();
        FormSettings {
            recompute_on_bill_edit: behavior
                .recompute_on_bill_edit
                .unwrap_or(defaults.recompute_on_bill_edit),
            initial_tip: behavior.initial_tip_fraction.unwrap_or(defaults.initial_tip),
            initial_split: behavior.initial_split.unwrap_or(defaults.initial_split),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(display) = &self.display {
            if let Some(symbol) = &display.currency_symbol {
                validate_non_empty_string("display.currency_symbol", symbol)?;
            }
            if let Some(places) = display.decimal_places {
                validate_range("display.decimal_places", places, 0, 4)?;
            }
        }

        if let Some(behavior) = &self.behavior {
            if let Some(fraction) = behavior.initial_tip_fraction {
                validate_range("behavior.initial_tip_fraction", fraction, 0.0, 1.0)?;
            }
            if let Some(split) = behavior.initial_split {
                validate_range("behavior.initial_split", split, MIN_SPLIT, MAX_SPLIT)?;
            }
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(TipError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[display]
currency_symbol = "€"
decimal_places = 1

[behavior]
recompute_on_bill_edit = false
initial_tip_fraction = 0.15
initial_split = 2

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let money = config.money_format();
        assert_eq!(money.currency_symbol, "€");
        assert_eq!(money.decimal_places, 1);

        let form = config.form_settings();
        assert!(!form.recompute_on_bill_edit);
        assert_eq!(form.initial_tip, 0.15);
        assert_eq!(form.initial_split, 2);

        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logging());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.money_format(), MoneyFormat::default());
        assert_eq!(config.form_settings(), FormSettings::default());
        assert!(!config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JETTIP_TEST_CURRENCY", "£");

        let toml_content = r#"
[display]
currency_symbol = "${JETTIP_TEST_CURRENCY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.money_format().currency_symbol, "£");

        std::env::remove_var("JETTIP_TEST_CURRENCY");
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let config = TomlConfig::from_toml_str("[behavior]\ninitial_split = 21\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[behavior]\ninitial_tip_fraction = 1.5\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[display]\ndecimal_places = 9\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[display\n").unwrap_err();
        assert!(matches!(err, TipError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ncurrency_symbol = \"CHF \"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.money_format().format(5.0), "CHF 5.00");
    }
}
