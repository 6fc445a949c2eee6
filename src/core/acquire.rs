use crate::domain::locale::{messages, Messages};
use crate::domain::model::{validate_daily_amount, DailySales, Target, DAYS_IN_WEEK, WEEK};
use crate::domain::ports::{ConfigProvider, InvalidInputPolicy, Prompter};
use crate::utils::error::{Result, SalesError};
use crate::utils::validation::parse_amount;
use chrono::Weekday;

/// Prompts until a strictly positive target is entered.
pub fn acquire_target<P, C>(prompter: &mut P, config: &C) -> Result<Target>
where
    P: Prompter + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let messages = messages();
    let mut prompt = format!(
        "\n{} ({} {})? ",
        messages.target_question,
        messages.in_currency,
        config.currency()
    );

    loop {
        let line = read_entry(prompter, &prompt)?;
        match parse_amount(&line).and_then(Target::new) {
            Ok(target) => {
                tracing::debug!("Accepted target {}", target.value());
                return Ok(target);
            }
            Err(e) => {
                reject(prompter, config, messages, e)?;
                prompt = format!("{} {} ", messages.retry, messages.target_retry_question);
            }
        }
    }
}

/// Prompts for each day of [`WEEK`] in order; a day is only left once it
/// holds a non-negative figure.
pub fn acquire_daily_sales<P, C>(prompter: &mut P, config: &C) -> Result<DailySales>
where
    P: Prompter + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let mut values = [0.0; DAYS_IN_WEEK];
    for (slot, day) in values.iter_mut().zip(WEEK) {
        *slot = acquire_day(prompter, config, day)?;
    }
    DailySales::new(values)
}

fn acquire_day<P, C>(prompter: &mut P, config: &C, day: Weekday) -> Result<f64>
where
    P: Prompter + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let messages = messages();
    let question = format!(
        "{} {} ({} {}): ",
        messages.sales_for,
        messages.day_name(day),
        messages.in_currency,
        config.currency()
    );
    let mut prompt = question.clone();

    loop {
        let line = read_entry(prompter, &prompt)?;
        match parse_amount(&line).and_then(|value| validate_daily_amount(day, value)) {
            Ok(value) => {
                tracing::debug!("Accepted {} sales for {}", value, day);
                return Ok(value);
            }
            Err(e) => {
                reject(prompter, config, messages, e)?;
                prompt = format!("{} {}", messages.retry, question);
            }
        }
    }
}

fn read_entry<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> Result<String> {
    prompter
        .ask(prompt)?
        .ok_or_else(|| SalesError::InputClosed {
            prompt: prompt.trim().to_string(),
        })
}

/// Tells the operator why an entry was refused, or hands the error back when
/// it must end the run.
fn reject<P, C>(prompter: &mut P, config: &C, messages: &Messages, error: SalesError) -> Result<()>
where
    P: Prompter + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let message = match &error {
        SalesError::NotANumber { .. } => {
            if config.invalid_input_policy() == InvalidInputPolicy::Abort {
                tracing::error!("Aborting on malformed entry: {}", error);
                return Err(error);
            }
            messages.not_a_number_error
        }
        SalesError::NonPositiveTarget { .. } => messages.target_error,
        SalesError::NegativeSales { .. } => messages.sales_error,
        SalesError::AmountTooLarge { .. } => messages.too_large_error,
        _ => return Err(error),
    };

    tracing::debug!("Rejected entry: {}", error);
    writeln!(prompter.output(), "{}", message)?;
    Ok(())
}
