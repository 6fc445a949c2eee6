use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("Not a valid number: '{input}'")]
    NotANumber { input: String },

    #[error("Target must be greater than 0, got {value}")]
    NonPositiveTarget { value: f64 },

    #[error("Sales for {day} cannot be negative, got {value}")]
    NegativeSales { day: Weekday, value: f64 },

    #[error("Amount {value} exceeds the maximum of {max}")]
    AmountTooLarge { value: f64, max: f64 },

    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Configuration,
    System,
}

impl SalesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SalesError::NotANumber { .. }
            | SalesError::NonPositiveTarget { .. }
            | SalesError::NegativeSales { .. }
            | SalesError::AmountTooLarge { .. } => ErrorCategory::Validation,
            SalesError::InputClosed { .. } => ErrorCategory::Input,
            SalesError::TomlError(_)
            | SalesError::ConfigError { .. }
            | SalesError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SalesError::IoError(_) | SalesError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Rejections the operator can fix by typing another value.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SalesError::NotANumber { input } => format!("'{}' is not a number", input),
            SalesError::InputClosed { .. } => {
                "Input ended before all sales figures were entered".to_string()
            }
            SalesError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            SalesError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Enter a numeric value within the allowed range",
            ErrorCategory::Input => "Provide a target and seven daily figures, one per line",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::System => "Check that the terminal is readable and writable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
