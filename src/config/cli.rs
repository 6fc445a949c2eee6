use crate::config::{AppConfig, FileConfig};
use crate::domain::ports::{InvalidInputPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "weekly-sales")]
#[command(about = "Interactive weekly sales tracker for a small online store")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Currency label printed after every amount
    #[arg(long)]
    pub currency: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stop on the first entry that is not a number instead of asking again
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                AppConfig::from(FileConfig::from_file(path)?)
            }
            None => AppConfig::default(),
        };

        if let Some(currency) = &self.currency {
            config.currency = currency.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.strict {
            config.on_invalid = InvalidInputPolicy::Abort;
        }

        config.validate()?;
        Ok(config)
    }
}
