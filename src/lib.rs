pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::terminal::ConsolePrompter;
pub use crate::config::AppConfig;
pub use crate::core::session::SalesSession;
pub use crate::domain::model::WeeklyReport;
pub use crate::utils::error::{Result, SalesError};
