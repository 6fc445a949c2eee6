use crate::core::acquire::{acquire_daily_sales, acquire_target};
use crate::core::analyzer::analyze;
use crate::core::report::{render_json, render_report, write_banner};
use crate::domain::locale::messages;
use crate::domain::model::WeeklyReport;
use crate::domain::ports::{ConfigProvider, OutputFormat, Prompter};
use crate::utils::error::Result;

/// Runs one week: target, seven daily figures, metrics, outcome, report.
/// Each phase starts only after the previous one has finished.
pub struct SalesSession<P: Prompter, C: ConfigProvider> {
    prompter: P,
    config: C,
}

impl<P: Prompter, C: ConfigProvider> SalesSession<P, C> {
    pub fn new(prompter: P, config: C) -> Self {
        Self { prompter, config }
    }

    pub fn run(&mut self) -> Result<WeeklyReport> {
        let messages = messages();
        let currency = self.config.currency().to_string();

        tracing::info!("Starting weekly sales session");
        write_banner(self.prompter.output(), &self.config, messages.title)?;

        let target = acquire_target(&mut self.prompter, &self.config)?;
        writeln!(
            self.prompter.output(),
            "{} {:.2} {}",
            messages.target_set,
            target.value(),
            currency
        )?;

        writeln!(self.prompter.output())?;
        write_banner(self.prompter.output(), &self.config, messages.registration_banner)?;

        let sales = acquire_daily_sales(&mut self.prompter, &self.config)?;
        writeln!(self.prompter.output(), "\n{}", messages.sales_recorded)?;

        let report = analyze(target, sales);

        match self.config.output_format() {
            OutputFormat::Text => render_report(self.prompter.output(), &report, &self.config)?,
            OutputFormat::Json => render_json(self.prompter.output(), &report, &self.config)?,
        }
        self.prompter.output().flush()?;

        tracing::info!(
            "Session finished: total {:.2}, target met: {}",
            report.metrics.total,
            report.outcome.met
        );
        Ok(report)
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
