use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Interactive line source paired with the stream prompts are written to.
pub trait Prompter {
    /// Shows `prompt` and blocks for one line. `Ok(None)` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    fn output(&mut self) -> &mut dyn Write;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do with an entry that is not a number at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    #[default]
    Retry,
    Abort,
}

pub trait ConfigProvider {
    fn currency(&self) -> &str;
    fn separator(&self) -> char;
    fn banner_width(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn invalid_input_policy(&self) -> InvalidInputPolicy;

    fn banner(&self) -> String {
        self.separator().to_string().repeat(self.banner_width())
    }
}
