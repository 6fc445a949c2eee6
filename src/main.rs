use clap::Parser;
use weekly_sales::utils::logger;
use weekly_sales::{CliConfig, ConsolePrompter, SalesError, SalesSession};

fn fail(e: SalesError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting weekly-sales CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let mut session = SalesSession::new(ConsolePrompter::stdio(), config);
    match session.run() {
        Ok(report) => {
            tracing::info!(
                "✅ Report rendered: {}/7 days at threshold, gap {:.2}",
                report.metrics.threshold_count,
                report.outcome.gap
            );
        }
        Err(e) => fail(e),
    }
}
