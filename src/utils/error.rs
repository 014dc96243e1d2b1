use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{line}': {reason}")]
    InvalidCommand { line: String, reason: String },

    #[error("Bill amount '{value}' is not a non-negative decimal")]
    InvalidBillInput { value: String },

    #[error("Tip fraction {value} is outside 0..=1")]
    InvalidTipFraction { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TipError::IoError(_) | TipError::SerializationError(_) => ErrorCategory::System,
            TipError::ConfigValidationError { .. } | TipError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TipError::InvalidCommand { .. }
            | TipError::InvalidBillInput { .. }
            | TipError::InvalidTipFraction { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // A bad keystroke never ends the session.
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the session can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TipError::IoError(_) => "Check that the input stream and config path are readable".to_string(),
            TipError::SerializationError(_) => {
                "JSON events look like {\"event\":\"slider_moved\",\"value\":0.18}".to_string()
            }
            TipError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            TipError::InvalidConfigValueError { field, .. } => {
                format!("Choose a supported value for '{}'", field)
            }
            TipError::InvalidCommand { .. } => {
                "Commands: bill <amount>, tip <0..1|n%>, +, -, done, show, quit".to_string()
            }
            TipError::InvalidBillInput { .. } => "Enter digits with an optional decimal point, e.g. 42.50".to_string(),
            TipError::InvalidTipFraction { .. } => "Use a fraction such as 0.18 or a percentage such as 18%".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TipError::IoError(e) => format!("Could not read or write: {}", e),
            TipError::SerializationError(e) => format!("Malformed event: {}", e),
            TipError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            TipError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not allowed for {}: {}", value, field, reason)
            }
            TipError::InvalidCommand { line, reason } => format!("Ignored '{}': {}", line, reason),
            TipError::InvalidBillInput { value } => format!("'{}' is not a bill amount", value),
            TipError::InvalidTipFraction { value } => format!("Tip slider cannot be set to {}", value),
        }
    }

    /// Process exit code for a fatal error, 0 when the error is only a warning.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TipError>;
