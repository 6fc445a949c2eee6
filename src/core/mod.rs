pub mod acquire;
pub mod analyzer;
pub mod report;
pub mod session;

pub use crate::domain::model::{DailySales, Metrics, Outcome, Target, WeeklyReport};
pub use crate::domain::ports::{ConfigProvider, Prompter};
pub use crate::utils::error::Result;
