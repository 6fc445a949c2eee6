#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, InvalidInputPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

pub use toml_config::FileConfig;

pub const DEFAULT_CURRENCY: &str = "euros";
pub const DEFAULT_SEPARATOR: char = '=';
pub const DEFAULT_BANNER_WIDTH: usize = 50;

/// Settings after merging defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub currency: String,
    pub separator: char,
    pub banner_width: usize,
    pub format: OutputFormat,
    pub on_invalid: InvalidInputPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            separator: DEFAULT_SEPARATOR,
            banner_width: DEFAULT_BANNER_WIDTH,
            format: OutputFormat::default(),
            on_invalid: InvalidInputPolicy::default(),
        }
    }
}

impl From<FileConfig> for AppConfig {
    fn from(file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            currency: file.report.currency.unwrap_or(defaults.currency),
            separator: file.report.separator.unwrap_or(defaults.separator),
            banner_width: file.report.banner_width.unwrap_or(defaults.banner_width),
            format: file.report.format.unwrap_or(defaults.format),
            on_invalid: file.input.on_invalid.unwrap_or(defaults.on_invalid),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn currency(&self) -> &str {
        &self.currency
    }

    fn separator(&self) -> char {
        self.separator
    }

    fn banner_width(&self) -> usize {
        self.banner_width
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn invalid_input_policy(&self) -> InvalidInputPolicy {
        self.on_invalid
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.currency", &self.currency)?;
        validate_range("report.banner_width", self.banner_width, 10, 200)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let config = AppConfig::default();
        assert_eq!(config.currency, "euros");
        assert_eq!(config.banner(), "=".repeat(50));
        assert_eq!(config.on_invalid, InvalidInputPolicy::Retry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = FileConfig::from_toml_str(
            r#"
[report]
currency = "USD"
banner_width = 30

[input]
on_invalid = "abort"
"#,
        )
        .unwrap();

        let config = AppConfig::from(file);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.banner_width, 30);
        assert_eq!(config.separator, '=');
        assert_eq!(config.on_invalid, InvalidInputPolicy::Abort);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AppConfig {
            currency: " ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            banner_width: 3,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
