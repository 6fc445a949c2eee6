use crate::domain::locale::messages;
use crate::domain::model::{meets_threshold, WeeklyReport, DAYS_IN_WEEK, THRESHOLD};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use chrono::Weekday;
use serde::Serialize;
use std::io::Write;

const LABEL_WIDTH: usize = 30;
const RESULT_WIDTH: usize = 31;
const THRESHOLD_LABEL_WIDTH: usize = 32;
const SUMMARY_WIDTH: usize = 18;
const DAY_WIDTH: usize = 12;

fn field(label: &str) -> String {
    padded(label, LABEL_WIDTH)
}

/// Pads `label` to `width` columns, always leaving at least one space.
fn padded(label: &str, width: usize) -> String {
    format!("{:<width$}", format!("{} ", label), width = width)
}

pub fn write_banner<W, C>(out: &mut W, config: &C, title: &str) -> Result<()>
where
    W: Write + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let banner = config.banner();
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", banner)?;
    Ok(())
}

/// Writes the analysis block, the per-day summary and the closing verdict.
pub fn render_report<W, C>(out: &mut W, report: &WeeklyReport, config: &C) -> Result<()>
where
    W: Write + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let m = messages();
    let currency = config.currency();
    let metrics = &report.metrics;
    let outcome = &report.outcome;

    writeln!(out)?;
    write_banner(out, config, m.analysis_banner)?;

    writeln!(out, "\n{}", m.metrics_heading)?;
    writeln!(out, "  - {}{:.2} {}", field(m.total_sales), metrics.total, currency)?;
    writeln!(out, "  - {}{:.2} {}", field(m.daily_mean), metrics.mean, currency)?;
    writeln!(
        out,
        "  - {}{}/{} {}",
        padded(
            &format!("{} {}€:", m.days_at_threshold, THRESHOLD),
            THRESHOLD_LABEL_WIDTH
        ),
        metrics.threshold_count,
        DAYS_IN_WEEK,
        m.days_unit
    )?;

    writeln!(out, "\n{}", m.evaluation_heading)?;
    writeln!(out, "  - {}{:.2} {}", field(m.target_label), report.target.value(), currency)?;
    writeln!(out, "  - {}{:.2} {}", field(m.total_achieved), metrics.total, currency)?;
    if outcome.met {
        writeln!(out, "  - {}{}", padded(m.result_label, RESULT_WIDTH), m.target_met)?;
        writeln!(out, "  - {}{:.2} {}", field(m.exceeded_by), outcome.gap, currency)?;
    } else {
        writeln!(out, "  - {}{}", padded(m.result_label, RESULT_WIDTH), m.target_missed)?;
        writeln!(out, "  - {}{:.2} {}", field(m.short_by), outcome.gap, currency)?;
    }

    writeln!(out)?;
    write_banner(out, config, m.summary_banner)?;

    writeln!(out, "\n{}", m.details_heading)?;
    for (day, value) in report.sales.iter() {
        write!(
            out,
            "  {:<width$} → {:8.2} {}",
            m.day_name(day),
            value,
            currency,
            width = DAY_WIDTH
        )?;
        if meets_threshold(value) {
            write!(out, " {}", m.threshold_note)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<w$}{:8.2} {}", m.week_total, metrics.total, currency, w = SUMMARY_WIDTH)?;
    writeln!(out, "{:<w$}{:8.2} {}", m.daily_average, metrics.mean, currency, w = SUMMARY_WIDTH)?;
    writeln!(
        out,
        "{:<w$}{:8.2} {}",
        m.objective,
        report.target.value(),
        currency,
        w = SUMMARY_WIDTH
    )?;

    writeln!(out)?;
    let verdict = if outcome.met { m.final_met } else { m.final_missed };
    write_banner(out, config, verdict)?;
    writeln!(out)?;

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonDay {
    weekday: Weekday,
    label: &'static str,
    sales: f64,
    at_threshold: bool,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    currency: &'a str,
    target: f64,
    days: Vec<JsonDay>,
    total: f64,
    mean: f64,
    threshold: f64,
    threshold_count: usize,
    met: bool,
    gap: f64,
}

pub fn render_json<W, C>(out: &mut W, report: &WeeklyReport, config: &C) -> Result<()>
where
    W: Write + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let messages = messages();
    let days = report
        .sales
        .iter()
        .map(|(weekday, sales)| JsonDay {
            weekday,
            label: messages.day_name(weekday),
            sales,
            at_threshold: meets_threshold(sales),
        })
        .collect();

    let json = JsonReport {
        currency: config.currency(),
        target: report.target.value(),
        days,
        total: report.metrics.total,
        mean: report.metrics.mean,
        threshold: THRESHOLD,
        threshold_count: report.metrics.threshold_count,
        met: report.outcome.met,
        gap: report.outcome.gap,
    };

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::analyzer::analyze;
    use crate::domain::model::{DailySales, Target};

    fn report(target: f64, sales: [f64; DAYS_IN_WEEK]) -> WeeklyReport {
        analyze(Target::new(target).unwrap(), DailySales::new(sales).unwrap())
    }

    fn render(report: &WeeklyReport, config: &AppConfig) -> String {
        let mut out = Vec::new();
        render_report(&mut out, report, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_week_report() {
        let text = render(&report(300.0, [50.0; DAYS_IN_WEEK]), &AppConfig::default());

        assert!(text.contains("  - Total de ventas:              350.00 euros\n"));
        assert!(text.contains("  - Media diaria:                 50.00 euros\n"));
        assert!(text.contains("  - Días con ventas >= 100€:        0/7 días\n"));
        assert!(text.contains("  - Resultado:                     OBJETIVO ALCANZADO\n"));
        assert!(text.contains("  - Superaste en:                 50.00 euros\n"));
        assert!(text.contains("  Lunes        →    50.00 euros\n"));
        assert!(text.contains("  Miércoles    →    50.00 euros\n"));
        assert!(!text.contains("Ventas en el umbral declarado"));
        assert!(text.contains("TOTAL SEMANA:       350.00 euros\n"));
        assert!(text.contains("PROMEDIO DIARIO:     50.00 euros\n"));
        assert!(text.contains("OBJETIVO:           300.00 euros\n"));
        assert!(text.contains("¡Objetivo cumplido!"));
    }

    #[test]
    fn test_sections_in_order() {
        let text = render(&report(300.0, [50.0; DAYS_IN_WEEK]), &AppConfig::default());
        let order = [
            "ANÁLISIS DE RESULTADOS",
            "MÉTRICAS CALCULADAS:",
            "EVALUACIÓN DEL OBJETIVO:",
            "RESUMEN FINAL SEMANAL",
            "Detalles por día:",
            "Lunes",
            "Domingo",
            "TOTAL SEMANA:",
            "¡Objetivo cumplido!",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_banners_are_fifty_separators() {
        let text = render(&report(300.0, [50.0; DAYS_IN_WEEK]), &AppConfig::default());
        let banner = "=".repeat(50);
        assert_eq!(text.lines().filter(|l| *l == banner).count(), 6);
    }

    #[test]
    fn test_missed_target_and_threshold_annotation() {
        let text = render(
            &report(600.0, [100.0, 0.0, 50.5, 200.0, 0.0, 0.0, 149.5]),
            &AppConfig::default(),
        );

        assert!(text.contains("  - Resultado:                     OBJETIVO NO ALCANZADO\n"));
        assert!(text.contains("  - Te falta:                     100.00 euros\n"));
        assert!(text.contains("  - Media diaria:                 71.43 euros\n"));
        assert!(text.contains("  - Días con ventas >= 100€:        3/7 días\n"));
        assert!(text.contains("  Lunes        →   100.00 euros Ventas en el umbral declarado\n"));
        assert!(text.contains("  Martes       →     0.00 euros\n"));
        assert!(text.contains("El objetivo no se ha cumplido"));
    }

    #[test]
    fn test_custom_currency_and_banner() {
        let config = AppConfig {
            currency: "USD".to_string(),
            separator: '-',
            banner_width: 20,
            ..AppConfig::default()
        };
        let text = render(&report(400.0, [100.0, 0.0, 50.5, 200.0, 0.0, 0.0, 149.5]), &config);

        assert!(text.contains(&"-".repeat(20)));
        assert!(!text.contains(&"-".repeat(21)));
        assert!(text.contains("OBJETIVO ALCANZADO"));
        assert!(text.contains("  - Superaste en:                 100.00 USD\n"));
        assert!(text.contains("  Miércoles    →    50.50 USD\n"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        let week = report(400.0, [100.0, 0.0, 50.5, 200.0, 0.0, 0.0, 149.5]);
        render_json(&mut out, &week, &AppConfig::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 500.0);
        assert_eq!(value["threshold_count"], 3);
        assert_eq!(value["met"], true);
        assert_eq!(value["gap"], 100.0);
        assert_eq!(value["days"].as_array().unwrap().len(), DAYS_IN_WEEK);
        assert_eq!(value["days"][2]["label"], "Miércoles");
        assert_eq!(value["days"][2]["at_threshold"], false);
        assert_eq!(value["days"][3]["at_threshold"], true);
    }
}
