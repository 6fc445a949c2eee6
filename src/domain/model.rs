use crate::utils::error::{Result, SalesError};
use chrono::Weekday;
use serde::Serialize;

/// Daily sales at or above this amount count as a good day.
pub const THRESHOLD: f64 = 100.0;

/// The mean always divides by the calendar week.
pub const DAYS_IN_WEEK: usize = 7;

/// Largest amount accepted for the target or a single day. Keeps the weekly
/// total and the gap finite.
pub const MAX_AMOUNT: f64 = 1.0e12;

/// Registration and display order.
pub const WEEK: [Weekday; DAYS_IN_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Desired weekly revenue. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Target(f64);

impl Target {
    pub fn new(value: f64) -> Result<Self> {
        if value <= 0.0 || !value.is_finite() {
            return Err(SalesError::NonPositiveTarget { value });
        }
        check_max(value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// One non-negative figure per day, aligned with [`WEEK`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailySales([f64; DAYS_IN_WEEK]);

impl DailySales {
    pub fn new(values: [f64; DAYS_IN_WEEK]) -> Result<Self> {
        let mut accepted = [0.0; DAYS_IN_WEEK];
        for ((slot, day), value) in accepted.iter_mut().zip(WEEK).zip(values) {
            *slot = validate_daily_amount(day, value)?;
        }
        Ok(Self(accepted))
    }

    pub fn values(&self) -> &[f64; DAYS_IN_WEEK] {
        &self.0
    }

    /// Pairs each day with its figure, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        WEEK.into_iter().zip(self.0.iter().copied())
    }
}

/// Accepts a non-negative daily figure. `-0` comes back as `0`.
pub fn validate_daily_amount(day: Weekday, value: f64) -> Result<f64> {
    if value < 0.0 || !value.is_finite() {
        return Err(SalesError::NegativeSales { day, value });
    }
    check_max(value)?;
    Ok(value + 0.0)
}

fn check_max(value: f64) -> Result<()> {
    if value > MAX_AMOUNT {
        return Err(SalesError::AmountTooLarge {
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

pub fn meets_threshold(value: f64) -> bool {
    value >= THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub total: f64,
    pub mean: f64,
    pub threshold_count: usize,
}

/// Whether the target was met, and the non-negative distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub met: bool,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub target: Target,
    pub sales: DailySales,
    pub metrics: Metrics,
    pub outcome: Outcome,
}
